//! # tb_core - Soccer Tactics Board
//!
//! Board model behind an interactive tactics board: two teams of eleven
//! markers and a ball on a percentage-based pitch, six fixed formations,
//! pass/movement arrows, player labels and a single in-memory snapshot.
//!
//! ## Features
//! - Positional formation layout (team B mirrored across the halfway line)
//! - Arrow arena with ids that are never reused
//! - Deep-copy save/load of the whole board
//! - Renderer-agnostic controller with a click-to-pass state machine

pub mod annotation;
pub mod board;
pub mod config;
pub mod controller;
pub mod coordinates;
pub mod entity;
pub mod error;
pub mod formation;
pub mod layout;
pub mod render;
pub mod snapshot;

pub use annotation::{AnnotationLayer, Arrow, ArrowId};
pub use board::BoardState;
pub use config::{ArrowStyle, BoardConfig, ConfigError, Notices};
pub use controller::{Command, DragState, PassMode, TacticsBoard, Viewport};
pub use coordinates::Position;
pub use entity::{Entity, EntityId, EntityKind, EntityRegistry, Team, DEFAULT_LABEL};
pub use error::{BoardError, Result};
pub use formation::{Formation, FormationSlot, SlotRole};
pub use render::{BoardRenderer, NullRenderer};
pub use snapshot::{BoardSnapshot, SnapshotStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
