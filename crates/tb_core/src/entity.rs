//! Entity registry: the players of both teams and the ball.
//!
//! Registration order is significant. Formation layout and snapshot restore
//! both match entities by their index in this order, never by label.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinates::Position;
use crate::error::{BoardError, Result};

pub const PLAYERS_PER_TEAM: usize = 11;

/// Placeholder label given to every player at first initialization ("name").
pub const DEFAULT_LABEL: &str = "이름";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    pub fn code(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityId {
    /// Index into the registration order of players.
    Player(usize),
    Ball,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Player(idx) => write!(f, "P{idx}"),
            EntityId::Ball => f.write_str("ball"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player(Team),
    Ball,
}

/// A draggable marker on the board.
///
/// Identity and kind are fixed at registration; only `label` and `position`
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    label: String,
    position: Position,
    home: Position,
}

impl Entity {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn team(&self) -> Option<Team> {
        match self.kind {
            EntityKind::Player(team) => Some(team),
            EntityKind::Ball => None,
        }
    }

    pub fn is_ball(&self) -> bool {
        self.kind == EntityKind::Ball
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Registration-time default position, restored by a reset.
    pub fn home(&self) -> Position {
        self.home
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

/// Kick-off layout for team A, goalkeeper first. Team B uses the mirror image.
pub const STANDARD_HOME_A: [Position; PLAYERS_PER_TEAM] = [
    Position::new(90.0, 45.0),
    Position::new(78.0, 15.0),
    Position::new(78.0, 35.0),
    Position::new(78.0, 55.0),
    Position::new(78.0, 75.0),
    Position::new(66.0, 20.0),
    Position::new(66.0, 40.0),
    Position::new(66.0, 60.0),
    Position::new(66.0, 80.0),
    Position::new(56.0, 35.0),
    Position::new(56.0, 55.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct EntityRegistry {
    players: Vec<Entity>,
    ball: Entity,
}

impl EntityRegistry {
    /// Empty roster with only the ball registered.
    pub fn new(ball_home: Position) -> Self {
        Self {
            players: Vec::new(),
            ball: Entity {
                id: EntityId::Ball,
                kind: EntityKind::Ball,
                label: String::new(),
                position: ball_home,
                home: ball_home,
            },
        }
    }

    /// Full 22-player roster: team A goalkeeper to forwards, then team B.
    pub fn standard(default_label: &str, ball_home: Position) -> Self {
        let mut registry = Self::new(ball_home);
        for team in Team::ALL {
            for home in STANDARD_HOME_A {
                let home = match team {
                    Team::A => home,
                    Team::B => home.mirrored(),
                };
                registry.register_player(team, home, default_label);
            }
        }
        registry
    }

    pub fn register_player(
        &mut self,
        team: Team,
        home: Position,
        label: impl Into<String>,
    ) -> EntityId {
        let id = EntityId::Player(self.players.len());
        self.players.push(Entity {
            id,
            kind: EntityKind::Player(team),
            label: label.into(),
            position: home,
            home,
        });
        id
    }

    pub fn players(&self) -> &[Entity] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    /// Players of one team, in registration order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = &Entity> {
        self.players.iter().filter(move |p| p.team() == Some(team))
    }

    pub(crate) fn team_players_mut(&mut self, team: Team) -> impl Iterator<Item = &mut Entity> {
        self.players.iter_mut().filter(move |p| p.team() == Some(team))
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Entity] {
        &mut self.players
    }

    pub(crate) fn ball_mut(&mut self) -> &mut Entity {
        &mut self.ball
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        match id {
            EntityId::Player(idx) => self.players.get(idx),
            EntityId::Ball => Some(&self.ball),
        }
    }

    fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        match id {
            EntityId::Player(idx) => self.players.get_mut(idx),
            EntityId::Ball => Some(&mut self.ball),
        }
    }

    /// All entities, players first, ball last.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.players.iter().chain(std::iter::once(&self.ball))
    }

    pub fn move_to(&mut self, id: EntityId, position: Position) -> Result<()> {
        let entity = self.get_mut(id).ok_or(BoardError::UnknownEntity(id))?;
        entity.set_position(position);
        Ok(())
    }

    /// Set a player's label. Blank input keeps the previous label.
    pub fn rename(&mut self, id: EntityId, label: &str) -> Result<()> {
        let label = label.trim();
        let entity = self.get_mut(id).ok_or(BoardError::UnknownEntity(id))?;
        if entity.is_ball() {
            return Err(BoardError::NotAPlayer(id));
        }
        if label.is_empty() {
            return Err(BoardError::EmptyRename);
        }
        entity.set_label(label);
        Ok(())
    }

    /// Move every entity back to its home. Labels are untouched.
    pub fn reset_positions(&mut self) {
        for entity in self.players.iter_mut().chain(std::iter::once(&mut self.ball)) {
            entity.position = entity.home;
        }
    }
}
