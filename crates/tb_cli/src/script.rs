//! Line-oriented board scripts
//!
//! One action per line. A line starting with `#` is a comment, and a
//! standalone `#` word starts a trailing comment, so labels like `#10` stay
//! intact:
//!
//! ```text
//! start
//! formation 4-3-3          # both teams
//! formation B 5-3-2        # one team
//! drag 3 40 20             # entity top left
//! drag ball 50 60
//! pass 9 10
//! arrow 10 10 90 90
//! erase 0
//! rename 4 Son Heung-min
//! save | load | reset | show
//! ```

use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;

use tb_core::{
    ArrowId, BoardError, BoardRenderer, BoardSnapshot, Command, EntityId, Position, TacticsBoard,
    Team,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Command(Command),
    TeamFormation { team: Team, name: String },
    Drag { id: EntityId, to: Position },
    Pass { from: EntityId, to: EntityId },
    Arrow { from: Position, to: Position },
    Erase(ArrowId),
    Rename { id: EntityId, label: String },
    Show,
}

fn parse_entity(token: &str) -> Result<EntityId> {
    if token.eq_ignore_ascii_case("ball") {
        return Ok(EntityId::Ball);
    }
    let idx = token.parse::<usize>().with_context(|| format!("invalid entity '{token}'"))?;
    Ok(EntityId::Player(idx))
}

fn parse_team(token: &str) -> Option<Team> {
    match token {
        "A" | "a" => Some(Team::A),
        "B" | "b" => Some(Team::B),
        _ => None,
    }
}

fn parse_number(token: Option<&str>, what: &str) -> Result<f32> {
    let token = token.ok_or_else(|| anyhow!("missing {what}"))?;
    token.parse::<f32>().with_context(|| format!("invalid {what} '{token}'"))
}

fn parse_position<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Position> {
    let top = parse_number(tokens.next(), "top")?;
    let left = parse_number(tokens.next(), "left")?;
    Ok(Position::new(top, left))
}

/// Parse one script line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Action>> {
    if line.trim_start().starts_with('#') {
        return Ok(None);
    }
    let mut tokens = line.split_whitespace().take_while(|word| *word != "#");
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "start" | "reset" | "save" | "load" => Action::Command(verb.parse()?),
        "show" => Action::Show,
        "formation" => {
            let first = tokens.next().ok_or_else(|| anyhow!("missing formation name"))?;
            match parse_team(first) {
                Some(team) => {
                    let name = tokens.next().ok_or_else(|| anyhow!("missing formation name"))?;
                    Action::TeamFormation { team, name: name.to_string() }
                }
                None => Action::Command(first.parse().map_err(|_| {
                    anyhow!(BoardError::UnknownFormation(first.to_string()))
                })?),
            }
        }
        "drag" => {
            let id = parse_entity(tokens.next().ok_or_else(|| anyhow!("missing entity"))?)?;
            Action::Drag { id, to: parse_position(&mut tokens)? }
        }
        "pass" => {
            let from = parse_entity(tokens.next().ok_or_else(|| anyhow!("missing source"))?)?;
            let to = parse_entity(tokens.next().ok_or_else(|| anyhow!("missing target"))?)?;
            Action::Pass { from, to }
        }
        "arrow" => {
            let from = parse_position(&mut tokens)?;
            let to = parse_position(&mut tokens)?;
            Action::Arrow { from, to }
        }
        "erase" => {
            let raw = tokens.next().ok_or_else(|| anyhow!("missing arrow id"))?;
            let id = raw.parse::<u64>().with_context(|| format!("invalid arrow id '{raw}'"))?;
            Action::Erase(ArrowId::from(id))
        }
        "rename" => {
            let id = parse_entity(tokens.next().ok_or_else(|| anyhow!("missing entity"))?)?;
            let label = tokens.by_ref().collect::<Vec<_>>().join(" ");
            Action::Rename { id, label }
        }
        other => bail!("unknown action '{other}'"),
    };

    if let Action::Drag { .. } | Action::Pass { .. } | Action::Arrow { .. } | Action::Erase(_) =
        action
    {
        if let Some(extra) = tokens.next() {
            bail!("unexpected '{extra}'");
        }
    }

    Ok(Some(action))
}

/// Parse a whole script, reporting the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(action) = parse_line(line).with_context(|| format!("line {}", idx + 1))? {
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Run actions against a board. Rejected interactions are logged and
/// skipped; only output failures abort the run.
pub fn run<R: BoardRenderer>(
    board: &mut TacticsBoard<R>,
    actions: &[Action],
    out: &mut impl Write,
) -> Result<()> {
    for action in actions {
        match action {
            Action::Command(command) => match board.execute(*command) {
                Ok(()) => {}
                Err(err) if err.is_user_visible() => log::info!("{}", err),
                Err(err) => return Err(err.into()),
            },
            Action::TeamFormation { team, name } => {
                board.apply_formation(*team, name);
            }
            Action::Drag { id, to } => {
                if board.drag_start(*id) {
                    board.drag_move(*to);
                    board.drag_end();
                } else {
                    log::warn!("drag of {} ignored (board not started or unknown entity)", id);
                }
            }
            Action::Pass { from, to } => {
                board.cancel_pass();
                board.click_entity(*from);
                if board.click_entity(*to).is_none() {
                    board.cancel_pass();
                    log::warn!("pass {} -> {} ignored", from, to);
                }
            }
            Action::Arrow { from, to } => {
                board.add_arrow(*from, *to);
            }
            Action::Erase(id) => {
                if !board.click_arrow(*id) {
                    log::debug!("arrow {} not on the board", id);
                }
            }
            Action::Rename { id, label } => {
                board.double_click(*id, Some(label.as_str()));
            }
            Action::Show => {
                let snapshot = BoardSnapshot::capture(board.state());
                writeln!(out, "{}", snapshot.to_json()?)?;
            }
        }
    }
    Ok(())
}
