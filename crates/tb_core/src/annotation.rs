//! Annotation layer: directed arrows drawn on the pitch.
//!
//! Endpoints are copied at creation time. Moving a player afterwards does not
//! move an arrow that was drawn from or to it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::coordinates::Position;

/// Arena key of an arrow. Allocated from a counter that never goes back, so
/// an id is never reused even after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArrowId(u64);

impl ArrowId {
    /// Rendering resource id for the arrowhead marker of this arrow.
    pub fn marker_id(self) -> String {
        format!("arrowhead-{}", self.0)
    }
}

impl fmt::Display for ArrowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArrowId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub id: ArrowId,
    pub from: Position,
    pub to: Position,
}

impl Arrow {
    pub fn length(&self) -> f32 {
        self.from.distance_to(self.to)
    }

    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationLayer {
    arrows: BTreeMap<ArrowId, Arrow>,
    next_id: u64,
}

impl AnnotationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never fails; degenerate and off-pitch arrows are kept as given.
    pub fn add_arrow(&mut self, from: Position, to: Position) -> ArrowId {
        let id = ArrowId(self.next_id);
        self.next_id += 1;
        self.arrows.insert(id, Arrow { id, from, to });
        id
    }

    /// Removing an id that is not present returns `None` and changes nothing.
    pub fn remove_arrow(&mut self, id: ArrowId) -> Option<Arrow> {
        let removed = self.arrows.remove(&id);
        if removed.is_none() {
            log::debug!("Arrow {} already removed", id);
        }
        removed
    }

    /// Drain every arrow. The caller owns releasing their visuals.
    pub fn clear(&mut self) -> Vec<Arrow> {
        std::mem::take(&mut self.arrows).into_values().collect()
    }

    pub fn get(&self, id: ArrowId) -> Option<&Arrow> {
        self.arrows.get(&id)
    }

    pub fn contains(&self, id: ArrowId) -> bool {
        self.arrows.contains_key(&id)
    }

    /// Arrows in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Arrow> {
        self.arrows.values()
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_twice() {
        let mut layer = AnnotationLayer::new();
        let id = layer.add_arrow(Position::new(10.0, 10.0), Position::new(90.0, 90.0));
        assert_eq!(layer.len(), 1);

        let removed = layer.remove_arrow(id).unwrap();
        assert_eq!(removed.from, Position::new(10.0, 10.0));
        assert_eq!(removed.to, Position::new(90.0, 90.0));
        assert!(layer.is_empty());

        assert!(layer.remove_arrow(id).is_none());
        assert!(layer.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut layer = AnnotationLayer::new();
        let a = layer.add_arrow(Position::CENTER, Position::CENTER);
        let b = layer.add_arrow(Position::CENTER, Position::CENTER);
        layer.remove_arrow(a);
        layer.remove_arrow(b);
        let c = layer.add_arrow(Position::CENTER, Position::CENTER);

        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(c > b);
        assert_ne!(c.marker_id(), b.marker_id());
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut layer = AnnotationLayer::new();
        let first = layer.add_arrow(Position::CENTER, Position::CENTER);
        let drained = layer.clear();
        assert_eq!(drained.len(), 1);
        assert!(layer.is_empty());

        let next = layer.add_arrow(Position::CENTER, Position::CENTER);
        assert!(next > first);
    }

    #[test]
    fn test_degenerate_and_off_pitch_accepted() {
        let mut layer = AnnotationLayer::new();
        let zero = layer.add_arrow(Position::new(40.0, 40.0), Position::new(40.0, 40.0));
        let wild = layer.add_arrow(Position::new(-10.0, 150.0), Position::new(200.0, -5.0));

        assert!(layer.get(zero).unwrap().is_degenerate());
        assert_eq!(layer.get(zero).unwrap().length(), 0.0);
        assert!(layer.contains(wild));
    }

    #[test]
    fn test_iter_in_creation_order() {
        let mut layer = AnnotationLayer::new();
        let ids: Vec<_> = (0..5)
            .map(|i| layer.add_arrow(Position::new(i as f32, 0.0), Position::CENTER))
            .collect();
        let seen: Vec<_> = layer.iter().map(|a| a.id).collect();
        assert_eq!(seen, ids);
        assert_eq!(ids[3].marker_id(), "arrowhead-3");
    }
}
