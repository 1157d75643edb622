//! Interaction controller
//!
//! `TacticsBoard` owns the live board, the snapshot store and the pass-mode
//! state machine, and pushes every visible change to a [`BoardRenderer`].
//! All mutation goes through `&mut self`, which keeps the board strictly
//! single-writer without any locking.

use std::str::FromStr;

use crate::annotation::{Arrow, ArrowId};
use crate::board::BoardState;
use crate::config::BoardConfig;
use crate::coordinates::{Position, PITCH_MAX};
use crate::entity::{EntityId, Team};
use crate::error::{BoardError, Result};
use crate::formation::Formation;
use crate::layout;
use crate::render::{BoardRenderer, NullRenderer};
use crate::snapshot::{BoardSnapshot, SnapshotStore};

/// Click-to-pass state: the first click picks a source, the second one
/// draws the arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassMode {
    #[default]
    Idle,
    AwaitingTarget(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(EntityId),
}

/// Zero-argument triggers of the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Save,
    Load,
    /// Applied to both teams.
    Formation(Formation),
}

impl FromStr for Command {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "reset" => Ok(Command::Reset),
            "save" => Ok(Command::Save),
            "load" => Ok(Command::Load),
            other => other
                .parse::<Formation>()
                .map(Command::Formation)
                .map_err(|_| BoardError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Pixel size of the surface the pitch is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a pointer location (pixels from the pitch's top-left corner)
    /// into the position that centers a marker of the given size under it.
    pub fn pointer_to_position(
        &self,
        x: f32,
        y: f32,
        marker_width: f32,
        marker_height: f32,
    ) -> Position {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        Position::new(
            (y - marker_height / 2.0) / height * PITCH_MAX,
            (x - marker_width / 2.0) / width * PITCH_MAX,
        )
    }

    /// Pixel offset `(x, y)` of a position.
    pub fn position_to_pixels(&self, position: Position) -> (f32, f32) {
        (position.left / PITCH_MAX * self.width, position.top / PITCH_MAX * self.height)
    }
}

pub struct TacticsBoard<R: BoardRenderer = NullRenderer> {
    config: BoardConfig,
    state: BoardState,
    snapshots: SnapshotStore,
    pass_mode: PassMode,
    drag: DragState,
    started: bool,
    renderer: R,
}

impl TacticsBoard<NullRenderer> {
    pub fn headless(config: BoardConfig) -> Self {
        Self::new(config, NullRenderer)
    }
}

impl<R: BoardRenderer> TacticsBoard<R> {
    pub fn new(config: BoardConfig, renderer: R) -> Self {
        let state = BoardState::new(&config);
        Self {
            config,
            state,
            snapshots: SnapshotStore::new(),
            pass_mode: PassMode::Idle,
            drag: DragState::Idle,
            started: false,
            renderer,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn pass_mode(&self) -> PassMode {
        self.pass_mode
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Drag and pass clicks are ignored until the board is started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ========================
    // Command surface
    // ========================

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Start => self.start(),
            Command::Reset => self.reset(),
            Command::Save => {
                self.save();
            }
            Command::Load => self.load()?,
            Command::Formation(formation) => self.apply_formation_both(formation),
        }
        Ok(())
    }

    pub fn start(&mut self) {
        self.started = true;
        self.reset_board();
        log::info!("Board started");
    }

    /// Reset positions, clear arrows, and drop any pending pass selection.
    pub fn reset(&mut self) {
        self.started = true;
        self.reset_board();
        log::info!("Board reset");
    }

    pub fn save(&mut self) -> &BoardSnapshot {
        self.renderer.notify(&self.config.notices.saved);
        self.snapshots.save(&self.state)
    }

    /// Restore the saved board. Without a snapshot the user is told so and
    /// the board is left as it was.
    pub fn load(&mut self) -> Result<()> {
        match self.snapshots.load(&mut self.state) {
            Ok(report) => {
                self.release(report.released);
                for id in report.created {
                    self.draw(id);
                }
                self.redraw_entities();
                self.renderer.notify(&self.config.notices.loaded);
                Ok(())
            }
            Err(err) => {
                if err.is_user_visible() {
                    self.renderer.notify(&self.config.notices.nothing_saved);
                }
                Err(err)
            }
        }
    }

    pub fn apply_formation_both(&mut self, formation: Formation) {
        log::info!("Formation {} applied to both teams", formation);
        for team in Team::ALL {
            self.place(team, formation);
        }
    }

    /// Apply a formation by name to one team. Unknown names move nobody.
    pub fn apply_formation(&mut self, team: Team, formation_name: &str) -> usize {
        let moved = self.state.apply_formation(team, formation_name);
        self.redraw(&moved);
        moved.len()
    }

    fn place(&mut self, team: Team, formation: Formation) {
        let moved = layout::apply(&mut self.state.registry, team, formation);
        self.redraw(&moved);
    }

    fn redraw(&mut self, ids: &[EntityId]) {
        for id in ids {
            if let Some(entity) = self.state.registry.get(*id) {
                self.renderer.update_entity(entity);
            }
        }
    }

    // ========================
    // Pointer input
    // ========================

    pub fn drag_start(&mut self, id: EntityId) -> bool {
        if !self.started || self.state.registry.get(id).is_none() {
            return false;
        }
        self.drag = DragState::Dragging(id);
        true
    }

    pub fn drag_move(&mut self, position: Position) {
        let DragState::Dragging(id) = self.drag else {
            return;
        };
        if self.state.move_entity(id, position).is_ok() {
            if let Some(entity) = self.state.registry.get(id) {
                self.renderer.update_entity(entity);
            }
        }
    }

    pub fn drag_end(&mut self) -> Option<EntityId> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Click on a player. Returns the arrow drawn when this click completes a
    /// pass. Clicking the selected player again draws a zero-length arrow.
    pub fn click_entity(&mut self, id: EntityId) -> Option<ArrowId> {
        if !self.started {
            return None;
        }
        let is_player = self.state.registry.get(id).is_some_and(|e| !e.is_ball());
        if !is_player {
            return None;
        }

        match self.pass_mode {
            PassMode::Idle => {
                self.pass_mode = PassMode::AwaitingTarget(id);
                self.renderer.set_highlight(id, true);
                None
            }
            PassMode::AwaitingTarget(source) => {
                self.cancel_pass();
                let arrow = self.state.add_arrow_between(source, id)?;
                self.draw(arrow);
                Some(arrow)
            }
        }
    }

    pub fn cancel_pass(&mut self) {
        if let PassMode::AwaitingTarget(source) = std::mem::take(&mut self.pass_mode) {
            self.renderer.set_highlight(source, false);
        }
    }

    /// Each drawn arrow removes itself when clicked.
    pub fn click_arrow(&mut self, id: ArrowId) -> bool {
        self.remove_arrow(id)
    }

    pub fn add_arrow(&mut self, from: Position, to: Position) -> ArrowId {
        let id = self.state.add_arrow(from, to);
        self.draw(id);
        id
    }

    /// Returns false when the arrow was already gone.
    pub fn remove_arrow(&mut self, id: ArrowId) -> bool {
        match self.state.remove_arrow(id) {
            Some(arrow) => {
                self.renderer.erase_arrow(arrow.id);
                true
            }
            None => false,
        }
    }

    // ========================
    // Text input
    // ========================

    /// Rename from a text prompt. `None` (cancelled) or blank input keeps
    /// the current label.
    pub fn double_click(&mut self, id: EntityId, input: Option<&str>) -> bool {
        let Some(label) = input else {
            log::debug!("Rename of {} cancelled", id);
            return false;
        };
        match self.state.rename(id, label) {
            Ok(()) => {
                if let Some(entity) = self.state.registry.get(id) {
                    self.renderer.update_entity(entity);
                }
                true
            }
            Err(err) => {
                log::debug!("Rename of {} ignored: {}", id, err);
                false
            }
        }
    }

    fn reset_board(&mut self) {
        self.cancel_pass();
        self.drag = DragState::Idle;
        let released = self.state.reset_positions();
        self.release(released);
        self.redraw_entities();
    }

    fn release(&mut self, arrows: Vec<Arrow>) {
        for arrow in arrows {
            self.renderer.erase_arrow(arrow.id);
        }
    }

    fn draw(&mut self, id: ArrowId) {
        if let Some(arrow) = self.state.annotations.get(id) {
            self.renderer.draw_arrow(arrow, &self.config.arrow);
        }
    }

    fn redraw_entities(&mut self) {
        for entity in self.state.registry.iter() {
            self.renderer.update_entity(entity);
        }
    }
}
