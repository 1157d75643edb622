// crates/tb_cli/src/console.rs
// Console renderer for scripted board runs

use tb_core::{Arrow, ArrowId, ArrowStyle, BoardRenderer, Entity, EntityId};

/// Renderer that turns board output into console lines.
///
/// Notices are always kept; arrow and entity updates only in verbose mode.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    verbose: bool,
    lines: Vec<String>,
}

impl ConsoleRenderer {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, lines: Vec::new() }
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn trace(&mut self, line: String) {
        if self.verbose {
            self.lines.push(line);
        }
    }
}

impl BoardRenderer for ConsoleRenderer {
    fn draw_arrow(&mut self, arrow: &Arrow, style: &ArrowStyle) {
        self.trace(format!(
            "  + arrow {} {} -> {} [{} {}px, {}]",
            arrow.id,
            arrow.from,
            arrow.to,
            style.color,
            style.stroke_width,
            arrow.id.marker_id()
        ));
    }

    fn erase_arrow(&mut self, id: ArrowId) {
        self.trace(format!("  - arrow {}", id));
    }

    fn update_entity(&mut self, entity: &Entity) {
        let team = entity.team().map(|t| t.code()).unwrap_or("-");
        self.trace(format!(
            "  ~ {} [{}] {} {}",
            entity.id(),
            team,
            entity.label(),
            entity.position()
        ));
    }

    fn set_highlight(&mut self, id: EntityId, on: bool) {
        self.trace(format!("  * {} {}", id, if on { "selected" } else { "released" }));
    }

    fn notify(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::{BoardConfig, Position, TacticsBoard};

    #[test]
    fn test_quiet_mode_keeps_only_notices() {
        let mut board = TacticsBoard::new(BoardConfig::default(), ConsoleRenderer::new(false));
        board.start();
        board.add_arrow(Position::CENTER, Position::new(10.0, 10.0));
        board.save();

        let lines = board.renderer_mut().take_lines();
        assert_eq!(lines, vec![BoardConfig::default().notices.saved]);
        assert!(board.renderer_mut().take_lines().is_empty());
    }

    #[test]
    fn test_verbose_mode_traces_arrows() {
        let mut board = TacticsBoard::new(BoardConfig::default(), ConsoleRenderer::new(true));
        let id = board.add_arrow(Position::CENTER, Position::new(10.0, 10.0));
        board.remove_arrow(id);

        let lines = board.renderer_mut().take_lines();
        assert!(lines[0].starts_with("  + arrow 0"));
        assert!(lines[0].contains("arrowhead-0"));
        assert_eq!(lines[1], "  - arrow 0");
    }
}
