//! Snapshot model: one in-memory capture of the whole board.
//!
//! A snapshot is a deep copy. Editing the live board after `save` never
//! changes the stored value and restoring never aliases it. Only the latest
//! snapshot is kept; nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::annotation::{Arrow, ArrowId};
use crate::board::BoardState;
use crate::coordinates::Position;
use crate::entity::{EntityId, Team};
use crate::error::{BoardError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub team: Team,
    pub position: Position,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowEntry {
    pub from: Position,
    pub to: Position,
}

/// Serializable aggregate of the board: players in registration order, the
/// ball, and arrow endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub players: Vec<PlayerEntry>,
    pub ball: Position,
    pub arrows: Vec<ArrowEntry>,
}

/// What a restore changed on the annotation layer.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Arrows that were on the board before the restore.
    pub released: Vec<Arrow>,
    /// Arrows recreated from the snapshot, in snapshot order.
    pub created: Vec<ArrowId>,
    /// Players whose position and label were written.
    pub restored: Vec<EntityId>,
}

impl BoardSnapshot {
    pub fn capture(state: &BoardState) -> Self {
        let players = state
            .registry
            .players()
            .iter()
            .filter_map(|p| {
                p.team().map(|team| PlayerEntry {
                    team,
                    position: p.position(),
                    label: p.label().to_string(),
                })
            })
            .collect();

        let arrows = state.annotations.iter().map(|a| ArrowEntry { from: a.from, to: a.to }).collect();

        Self { players, ball: state.registry.ball().position(), arrows }
    }

    /// Write this snapshot onto a live board.
    ///
    /// Players are matched by registration index; entries past the shorter
    /// of the two lists are ignored. The stored team is not checked.
    pub fn apply_to(&self, state: &mut BoardState) -> RestoreReport {
        let mut report = RestoreReport::default();

        for (player, entry) in state.registry.players_mut().iter_mut().zip(&self.players) {
            player.set_position(entry.position);
            player.set_label(entry.label.clone());
            report.restored.push(player.id());
        }
        if self.players.len() != state.registry.player_count() {
            log::debug!(
                "Snapshot has {} players, board has {}; extra entries ignored",
                self.players.len(),
                state.registry.player_count()
            );
        }

        state.registry.ball_mut().set_position(self.ball);

        report.released = state.annotations.clear();
        report.created =
            self.arrows.iter().map(|entry| state.annotations.add_arrow(entry.from, entry.to)).collect();

        report
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Holds at most one snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Option<BoardSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the board, replacing any earlier snapshot.
    pub fn save(&mut self, state: &BoardState) -> &BoardSnapshot {
        let snapshot = BoardSnapshot::capture(state);
        log::info!(
            "Board saved ({} players, {} arrows)",
            snapshot.players.len(),
            snapshot.arrows.len()
        );
        self.current.insert(snapshot)
    }

    /// Restore the stored snapshot. Without one the board is left untouched.
    pub fn load(&self, state: &mut BoardState) -> Result<RestoreReport> {
        let snapshot = self.current.as_ref().ok_or(BoardError::NoSnapshotAvailable)?;
        let report = snapshot.apply_to(state);
        log::info!("Board loaded ({} arrows recreated)", report.created.len());
        Ok(report)
    }

    pub fn current(&self) -> Option<&BoardSnapshot> {
        self.current.as_ref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }
}
