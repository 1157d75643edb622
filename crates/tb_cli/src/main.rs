//! Tactics Board CLI
//!
//! Lists the formation tables and runs board scripts against one in-memory
//! board. Nothing is written back to disk.

mod console;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use console::ConsoleRenderer;
use tb_core::{BoardConfig, Formation, Position, SlotRole, TacticsBoard, Team};

#[derive(Parser)]
#[command(name = "tb_cli")]
#[command(about = "Soccer tactics board: formations, arrows and snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the formation tables for both teams
    Formations {
        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run a board script ("-" reads stdin)
    Run {
        /// Script file path
        script: PathBuf,

        /// Board config (JSON or YAML); defaults to $TB_BOARD_CONFIG_PATH
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trace every arrow and marker update
        #[arg(long, default_value = "false")]
        verbose: bool,
    },
}

#[derive(Serialize)]
struct SlotView {
    role: SlotRole,
    team_a: Position,
    team_b: Position,
}

#[derive(Serialize)]
struct FormationView {
    name: &'static str,
    defenders: usize,
    midfielders: usize,
    forwards: usize,
    slots: Vec<SlotView>,
}

fn formation_views() -> Vec<FormationView> {
    Formation::ALL
        .into_iter()
        .map(|formation| {
            let a = formation.layout(Team::A);
            let b = formation.layout(Team::B);
            let slots = formation
                .slots()
                .iter()
                .enumerate()
                .map(|(i, slot)| SlotView { role: slot.role, team_a: a[i], team_b: b[i] })
                .collect();
            FormationView {
                name: formation.name(),
                defenders: formation.defender_count(),
                midfielders: formation.midfielder_count(),
                forwards: formation.forward_count(),
                slots,
            }
        })
        .collect()
}

fn print_formations(json: bool) -> Result<()> {
    let views = formation_views();
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    for view in &views {
        println!(
            "\n{} ({} DF / {} MF / {} FW)",
            view.name, view.defenders, view.midfielders, view.forwards
        );
        for (i, slot) in view.slots.iter().enumerate() {
            println!(
                "  {:>2} {:<4} {:<10} A {}  B {}",
                i,
                slot.role.short_name(),
                slot.role.korean_name(),
                slot.team_a,
                slot.team_b
            );
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    let config = match path {
        Some(path) => BoardConfig::from_path(path)?,
        None => BoardConfig::from_env()?,
    };
    Ok(config)
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).context("failed to read script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run_script(script_path: &Path, config: Option<&Path>, verbose: bool) -> Result<()> {
    let config = load_config(config)?;
    let actions = script::parse_script(&read_script(script_path)?)?;
    log::info!("Running {} actions from {}", actions.len(), script_path.display());

    let mut board = TacticsBoard::new(config, ConsoleRenderer::new(verbose));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for action in &actions {
        script::run(&mut board, std::slice::from_ref(action), &mut out)?;
        for line in board.renderer_mut().take_lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Formations { json } => print_formations(json)?,
        Commands::Run { script, config, verbose } => {
            run_script(&script, config.as_deref(), verbose)?
        }
    }

    Ok(())
}
