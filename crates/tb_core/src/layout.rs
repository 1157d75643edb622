//! Formation layout engine
//!
//! Slot *i* of a formation goes to the *i*-th player of the team in
//! registration order. Assignment is positional only; roles are ignored.
//! A roster shorter than the table leaves the extra slots unused, and a
//! longer roster leaves the unmatched players where they were.

use crate::entity::{EntityId, EntityRegistry, Team};
use crate::formation::Formation;

/// Apply a formation by name. An unknown name is a silent no-op.
///
/// Returns the ids of the players that were moved.
pub fn apply_formation(
    registry: &mut EntityRegistry,
    team: Team,
    formation_name: &str,
) -> Vec<EntityId> {
    match formation_name.parse::<Formation>() {
        Ok(formation) => apply(registry, team, formation),
        Err(err) => {
            log::debug!("Formation request for team {} ignored: {}", team, err);
            Vec::new()
        }
    }
}

pub fn apply(registry: &mut EntityRegistry, team: Team, formation: Formation) -> Vec<EntityId> {
    let layout = formation.layout(team);
    let moved: Vec<EntityId> = registry
        .team_players_mut(team)
        .zip(layout)
        .map(|(player, target)| {
            player.set_position(target);
            player.id()
        })
        .collect();

    log::debug!("Applied {} to team {} ({} players placed)", formation, team, moved.len());
    moved
}
