// crates/tb_core/src/formation.rs
// Fixed formation tables: six schemes, 11 slots each, goalkeeper first

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coordinates::Position;
use crate::entity::{Team, PLAYERS_PER_TEAM};
use crate::error::BoardError;

/// Role printed on a formation slot. Layout assignment never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRole {
    Goalkeeper,
    LeftBack,
    CenterBack,
    RightBack,
    LeftWingBack,
    RightWingBack,
    DefensiveMidfielder,
    CentralMidfielder,
    LeftMidfielder,
    RightMidfielder,
    AttackingMidfielder,
    LeftWinger,
    RightWinger,
    Striker,
}

impl SlotRole {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::LeftBack => "LB",
            Self::CenterBack => "CB",
            Self::RightBack => "RB",
            Self::LeftWingBack => "LWB",
            Self::RightWingBack => "RWB",
            Self::DefensiveMidfielder => "CDM",
            Self::CentralMidfielder => "CM",
            Self::LeftMidfielder => "LM",
            Self::RightMidfielder => "RM",
            Self::AttackingMidfielder => "CAM",
            Self::LeftWinger => "LW",
            Self::RightWinger => "RW",
            Self::Striker => "ST",
        }
    }

    pub fn korean_name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "골키퍼",
            Self::LeftBack => "왼쪽 풀백",
            Self::CenterBack => "센터백",
            Self::RightBack => "오른쪽 풀백",
            Self::LeftWingBack => "왼쪽 윙백",
            Self::RightWingBack => "오른쪽 윙백",
            Self::DefensiveMidfielder => "수비형 미드필더",
            Self::CentralMidfielder => "중앙 미드필더",
            Self::LeftMidfielder => "왼쪽 미드필더",
            Self::RightMidfielder => "오른쪽 미드필더",
            Self::AttackingMidfielder => "공격형 미드필더",
            Self::LeftWinger => "왼쪽 윙어",
            Self::RightWinger => "오른쪽 윙어",
            Self::Striker => "스트라이커",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub role: SlotRole,
    /// Team A coordinates.
    pub position: Position,
}

const fn slot(role: SlotRole, top: f32, left: f32) -> FormationSlot {
    FormationSlot { role, position: Position::new(top, left) }
}

use SlotRole::*;

const T433: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(LeftBack, 70.0, 15.0),
    slot(CenterBack, 70.0, 35.0),
    slot(CenterBack, 70.0, 55.0),
    slot(RightBack, 70.0, 75.0),
    slot(CentralMidfielder, 50.0, 30.0),
    slot(CentralMidfielder, 50.0, 45.0),
    slot(CentralMidfielder, 50.0, 60.0),
    slot(LeftWinger, 30.0, 25.0),
    slot(Striker, 30.0, 45.0),
    slot(RightWinger, 30.0, 65.0),
];

const T4231: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(LeftBack, 70.0, 15.0),
    slot(CenterBack, 70.0, 35.0),
    slot(CenterBack, 70.0, 55.0),
    slot(RightBack, 70.0, 75.0),
    slot(DefensiveMidfielder, 50.0, 35.0),
    slot(DefensiveMidfielder, 50.0, 55.0),
    slot(LeftWinger, 35.0, 25.0),
    slot(AttackingMidfielder, 35.0, 45.0),
    slot(RightWinger, 35.0, 65.0),
    slot(Striker, 20.0, 45.0),
];

const T442: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(LeftBack, 70.0, 15.0),
    slot(CenterBack, 70.0, 35.0),
    slot(CenterBack, 70.0, 55.0),
    slot(RightBack, 70.0, 75.0),
    slot(LeftMidfielder, 50.0, 20.0),
    slot(CentralMidfielder, 50.0, 40.0),
    slot(CentralMidfielder, 50.0, 60.0),
    slot(RightMidfielder, 50.0, 80.0),
    slot(Striker, 30.0, 35.0),
    slot(Striker, 30.0, 55.0),
];

const T352: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(CenterBack, 70.0, 25.0),
    slot(CenterBack, 70.0, 45.0),
    slot(CenterBack, 70.0, 65.0),
    slot(LeftWingBack, 50.0, 15.0),
    slot(CentralMidfielder, 50.0, 35.0),
    slot(CentralMidfielder, 50.0, 55.0),
    slot(RightWingBack, 50.0, 75.0),
    slot(AttackingMidfielder, 30.0, 35.0),
    slot(AttackingMidfielder, 30.0, 65.0),
    slot(Striker, 20.0, 45.0),
];

const T532: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(LeftWingBack, 70.0, 10.0),
    slot(CenterBack, 70.0, 30.0),
    slot(CenterBack, 70.0, 50.0),
    slot(CenterBack, 70.0, 70.0),
    slot(RightWingBack, 70.0, 90.0),
    slot(CentralMidfielder, 50.0, 35.0),
    slot(CentralMidfielder, 50.0, 55.0),
    slot(AttackingMidfielder, 30.0, 25.0),
    slot(AttackingMidfielder, 30.0, 65.0),
    slot(Striker, 20.0, 45.0),
];

const T451: [FormationSlot; PLAYERS_PER_TEAM] = [
    slot(Goalkeeper, 85.0, 45.0),
    slot(LeftBack, 70.0, 15.0),
    slot(CenterBack, 70.0, 35.0),
    slot(CenterBack, 70.0, 55.0),
    slot(RightBack, 70.0, 75.0),
    slot(LeftMidfielder, 50.0, 10.0),
    slot(CentralMidfielder, 50.0, 30.0),
    slot(CentralMidfielder, 50.0, 50.0),
    slot(CentralMidfielder, 50.0, 70.0),
    slot(RightMidfielder, 50.0, 90.0),
    slot(Striker, 30.0, 45.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    F433,
    F4231,
    F442,
    F352,
    F532,
    F451,
}

impl Formation {
    /// Command order of the formation buttons.
    pub const ALL: [Formation; 6] = [
        Formation::F433,
        Formation::F4231,
        Formation::F442,
        Formation::F352,
        Formation::F532,
        Formation::F451,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::F433 => "F433",
            Self::F4231 => "F4231",
            Self::F442 => "F442",
            Self::F352 => "F352",
            Self::F532 => "F532",
            Self::F451 => "F451",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::F433 => "4-3-3",
            Self::F4231 => "4-2-3-1",
            Self::F442 => "4-4-2",
            Self::F352 => "3-5-2",
            Self::F532 => "5-3-2",
            Self::F451 => "4-5-1",
        }
    }

    /// Slot table as seen by team A (defending the lower goal).
    pub fn slots(&self) -> &'static [FormationSlot; PLAYERS_PER_TEAM] {
        match self {
            Self::F433 => &T433,
            Self::F4231 => &T4231,
            Self::F442 => &T442,
            Self::F352 => &T352,
            Self::F532 => &T532,
            Self::F451 => &T451,
        }
    }

    /// Target positions for one side. Team B's table is team A's mirrored
    /// across the halfway line.
    pub fn layout(&self, team: Team) -> [Position; PLAYERS_PER_TEAM] {
        let slots = *self.slots();
        slots.map(|slot| match team {
            Team::A => slot.position,
            Team::B => slot.position.mirrored(),
        })
    }

    fn lines(&self) -> impl Iterator<Item = usize> {
        self.name().split('-').filter_map(|n| n.parse().ok())
    }

    pub fn defender_count(&self) -> usize {
        self.lines().next().unwrap_or(0)
    }

    pub fn forward_count(&self) -> usize {
        self.lines().last().unwrap_or(0)
    }

    pub fn midfielder_count(&self) -> usize {
        let total: usize = self.lines().sum();
        total - self.defender_count() - self.forward_count()
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formation {
    type Err = BoardError;

    /// Accepts "4-3-3", "433" or "F433".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let digits: String = wanted.chars().filter(char::is_ascii_digit).collect();
        Formation::ALL
            .into_iter()
            .find(|f| {
                f.name() == wanted
                    || f.id().eq_ignore_ascii_case(wanted)
                    || (!digits.is_empty() && digits.len() == wanted.len() && f.id()[1..] == digits)
            })
            .ok_or_else(|| BoardError::UnknownFormation(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formations_have_11_slots_goalkeeper_first() {
        for formation in Formation::ALL {
            let slots = formation.slots();
            assert_eq!(slots.len(), PLAYERS_PER_TEAM);
            assert_eq!(slots[0].role, SlotRole::Goalkeeper, "{formation} keeper slot");
            assert!(
                slots.iter().filter(|s| s.role == SlotRole::Goalkeeper).count() == 1,
                "{formation} should have exactly one goalkeeper"
            );
        }
    }

    #[test]
    fn test_slots_on_pitch_and_in_own_half_order() {
        for formation in Formation::ALL {
            for slot in formation.slots() {
                assert!(slot.position.is_on_pitch(), "{formation} slot {:?}", slot);
            }
            // Team A attacks upwards: later slots never sit deeper than the keeper.
            let keeper_top = formation.slots()[0].position.top;
            assert!(formation.slots().iter().all(|s| s.position.top <= keeper_top));
        }
    }

    #[test]
    fn test_team_b_layout_is_mirrored() {
        let a = Formation::F433.layout(Team::A);
        let b = Formation::F433.layout(Team::B);
        assert_eq!(b[0], Position::new(15.0, 45.0));
        assert_eq!(b[10], Position::new(70.0, 65.0));
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.mirrored(), *pb);
        }

        let b = Formation::F4231.layout(Team::B);
        assert_eq!(b[10], Position::new(80.0, 45.0));
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(Formation::F433.defender_count(), 4);
        assert_eq!(Formation::F433.midfielder_count(), 3);
        assert_eq!(Formation::F433.forward_count(), 3);

        assert_eq!(Formation::F4231.defender_count(), 4);
        assert_eq!(Formation::F4231.midfielder_count(), 5);
        assert_eq!(Formation::F4231.forward_count(), 1);

        assert_eq!(Formation::F532.defender_count(), 5);
        assert_eq!(Formation::F532.midfielder_count(), 3);
        assert_eq!(Formation::F532.forward_count(), 2);

        for formation in Formation::ALL {
            let outfield = formation.defender_count()
                + formation.midfielder_count()
                + formation.forward_count();
            assert_eq!(outfield, PLAYERS_PER_TEAM - 1, "{formation}");
        }
    }

    #[test]
    fn test_parse_formation_names() {
        assert_eq!("4-3-3".parse::<Formation>().unwrap(), Formation::F433);
        assert_eq!(" 4-2-3-1 ".parse::<Formation>().unwrap(), Formation::F4231);
        assert_eq!("442".parse::<Formation>().unwrap(), Formation::F442);
        assert_eq!("f352".parse::<Formation>().unwrap(), Formation::F352);
        for formation in Formation::ALL {
            assert_eq!(formation.to_string().parse::<Formation>().unwrap(), formation);
        }
    }

    #[test]
    fn test_parse_unknown_formation() {
        for bad in ["", "4-4-3", "2-3-5", "WM", "4433"] {
            let err = bad.parse::<Formation>().unwrap_err();
            assert!(matches!(err, BoardError::UnknownFormation(_)), "{bad}");
        }
    }

    #[test]
    fn test_korean_role_names_exist() {
        for formation in Formation::ALL {
            for slot in formation.slots() {
                assert!(!slot.role.korean_name().is_empty());
                assert!(!slot.role.short_name().is_empty());
            }
        }
    }
}
