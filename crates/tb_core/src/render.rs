//! Rendering capability consumed by the board controller.
//!
//! The board only pushes to a renderer, it never reads state back from one.

use crate::annotation::{Arrow, ArrowId};
use crate::config::ArrowStyle;
use crate::entity::{Entity, EntityId};

pub trait BoardRenderer {
    /// Draw a new arrow. Clicking it must be routed back as
    /// `TacticsBoard::click_arrow(arrow.id)`.
    fn draw_arrow(&mut self, arrow: &Arrow, style: &ArrowStyle);

    /// Release the visual and click handler of an arrow.
    fn erase_arrow(&mut self, id: ArrowId);

    fn update_entity(&mut self, entity: &Entity);

    /// Pass-mode selection marker.
    fn set_highlight(&mut self, id: EntityId, on: bool);

    fn notify(&mut self, message: &str);
}

/// Renderer for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
    fn draw_arrow(&mut self, _arrow: &Arrow, _style: &ArrowStyle) {}

    fn erase_arrow(&mut self, _id: ArrowId) {}

    fn update_entity(&mut self, _entity: &Entity) {}

    fn set_highlight(&mut self, _id: EntityId, _on: bool) {}

    fn notify(&mut self, _message: &str) {}
}
