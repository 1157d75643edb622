//! Live board state
//!
//! `BoardState` holds everything a snapshot captures: the entity registry and
//! the annotation layer. It has no notion of rendering; operations that drop
//! arrows hand them back so the caller can release their visuals.

use crate::annotation::{AnnotationLayer, Arrow, ArrowId};
use crate::config::BoardConfig;
use crate::coordinates::Position;
use crate::entity::{EntityId, EntityRegistry, Team};
use crate::error::Result;
use crate::layout;

#[derive(Debug, Clone)]
pub struct BoardState {
    pub registry: EntityRegistry,
    pub annotations: AnnotationLayer,
}

impl BoardState {
    /// Standard 22-player board with the configured default label.
    pub fn new(config: &BoardConfig) -> Self {
        Self::from_parts(
            EntityRegistry::standard(&config.default_label, config.ball_home),
            AnnotationLayer::new(),
        )
    }

    pub fn from_parts(registry: EntityRegistry, annotations: AnnotationLayer) -> Self {
        Self { registry, annotations }
    }

    /// Every entity back to its home, ball to its home, all arrows removed.
    ///
    /// Returns the removed arrows.
    pub fn reset_positions(&mut self) -> Vec<Arrow> {
        self.registry.reset_positions();
        self.annotations.clear()
    }

    pub fn apply_formation(&mut self, team: Team, formation_name: &str) -> Vec<EntityId> {
        layout::apply_formation(&mut self.registry, team, formation_name)
    }

    pub fn move_entity(&mut self, id: EntityId, position: Position) -> Result<()> {
        self.registry.move_to(id, position)
    }

    pub fn rename(&mut self, id: EntityId, label: &str) -> Result<()> {
        self.registry.rename(id, label)
    }

    pub fn add_arrow(&mut self, from: Position, to: Position) -> ArrowId {
        self.annotations.add_arrow(from, to)
    }

    /// Arrow between the current positions of two entities.
    pub fn add_arrow_between(&mut self, from: EntityId, to: EntityId) -> Option<ArrowId> {
        let start = self.registry.get(from)?.position();
        let end = self.registry.get(to)?.position();
        Some(self.annotations.add_arrow(start, end))
    }

    pub fn remove_arrow(&mut self, id: ArrowId) -> Option<Arrow> {
        self.annotations.remove_arrow(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::STANDARD_HOME_A;

    fn board() -> BoardState {
        BoardState::new(&BoardConfig::default())
    }

    #[test]
    fn test_reset_clears_arrows_and_is_idempotent() {
        let mut state = board();
        state.apply_formation(Team::A, "4-3-3");
        state.move_entity(EntityId::Ball, Position::new(12.0, 34.0)).unwrap();
        state.add_arrow(Position::new(1.0, 1.0), Position::new(2.0, 2.0));
        state.add_arrow(Position::new(3.0, 3.0), Position::new(4.0, 4.0));

        let released = state.reset_positions();
        assert_eq!(released.len(), 2);
        assert!(state.annotations.is_empty());
        let once = state.registry.clone();

        let released = state.reset_positions();
        assert!(released.is_empty());
        assert_eq!(state.registry, once);
        assert_eq!(state.registry.ball().position(), Position::CENTER);
        assert_eq!(state.registry.players()[0].position(), STANDARD_HOME_A[0]);
    }

    #[test]
    fn test_arrow_endpoints_independent_of_players() {
        let mut state = board();
        let from = EntityId::Player(9);
        let to = EntityId::Player(10);
        let start = state.registry.get(from).unwrap().position();
        let end = state.registry.get(to).unwrap().position();

        let id = state.add_arrow_between(from, to).unwrap();
        state.move_entity(from, Position::new(5.0, 5.0)).unwrap();
        state.apply_formation(Team::A, "4-5-1");

        let arrow = state.annotations.get(id).unwrap();
        assert_eq!(arrow.from, start);
        assert_eq!(arrow.to, end);
    }

    #[test]
    fn test_arrow_between_unknown_entity() {
        let mut state = board();
        assert!(state.add_arrow_between(EntityId::Player(0), EntityId::Player(77)).is_none());
        assert!(state.annotations.is_empty());
    }
}
