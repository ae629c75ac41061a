//! # Arena CLI Application
//!
//! Terminal companion to the Arena workspace. Prints sanitized problem
//! statements, lists the language and theme registries, checks problem and
//! settings files, and replays divider drags headlessly.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use arena_core::editor::EditorTheme;
use arena_core::split_pane::{DragOutcome, PointerEvent, SplitPane};
use arena_core::{load_problem, Problem, Workspace, WorkspaceError, WorkspaceResult, WorkspaceSettings};

#[derive(Parser)]
#[command(name = "arena_cli", version, about = "Inspect Arena problems and workspace settings")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workspace settings file (TOML).
    #[arg(long, value_name = "PATH", global = true)]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print a problem's statement after sanitization.
    Statement {
        /// Problem JSON file (defaults to the bundled sample).
        problem: Option<PathBuf>,

        /// Print the unsanitized statement instead.
        #[arg(long)]
        raw: bool,
    },

    /// List the language registry.
    Languages,

    /// List the editor themes.
    Themes,

    /// Mount a workspace and print its initial layout snapshot as JSON.
    Check {
        /// Problem JSON file (defaults to the bundled sample).
        problem: Option<PathBuf>,
    },

    /// Replay a divider drag: press, move to each X, release.
    Drag {
        /// Container width in pixels.
        #[arg(long, default_value_t = 1000.0)]
        width: f64,

        /// Pointer X positions, in order.
        #[arg(required = true, allow_negative_numbers = true)]
        xs: Vec<f64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> WorkspaceResult<()> {
    let settings = WorkspaceSettings::load_or_default(cli.settings.as_deref())?;

    match &cli.command {
        Command::Statement { problem, raw } => {
            let problem = problem_or_sample(problem.as_deref())?;
            if *raw {
                println!("{}", problem.statement);
            } else {
                println!("{}", problem.safe_statement());
            }
        }
        Command::Languages => {
            let workspace = Workspace::new(&settings, Problem::sample());
            let selected = workspace.editor_config().language.clone();
            for option in workspace.languages().options() {
                let marker = if option.value == selected.as_str() { "*" } else { " " };
                println!("{} {:<12} {}", marker, option.value, option.display_name);
            }
        }
        Command::Themes => {
            for theme in EditorTheme::ALL {
                let marker = if theme == settings.editor.default_theme { "*" } else { " " };
                println!("{} {:<12} {}", marker, theme.id(), theme.display_name());
            }
        }
        Command::Check { problem } => {
            let problem = problem_or_sample(problem.as_deref())?;
            let workspace = Workspace::new(&settings, problem);
            let snapshot = serde_json::to_string_pretty(&workspace.snapshot())
                .map_err(|e| WorkspaceError::serialization(e.to_string()))?;
            println!("{}", snapshot);

            let problem = workspace.problem();
            for option in workspace.languages().options() {
                let status = if problem.starter_code.contains_key(&option.value) {
                    "starter code"
                } else {
                    "no starter code"
                };
                println!("{:<12} {}", option.value, status);
            }
            for language in problem.starter_code.keys() {
                if !workspace.languages().contains(language) {
                    println!("warning: starter code for unregistered language '{}'", language);
                }
            }
        }
        Command::Drag { width, xs } => {
            let mut pane = SplitPane::new(settings.layout.initial_left_percent);
            replay_drag(&mut pane, *width, xs);
        }
    }
    Ok(())
}

fn problem_or_sample(path: Option<&Path>) -> WorkspaceResult<Problem> {
    match path {
        Some(path) => load_problem(path),
        None => Ok(Problem::sample()),
    }
}

/// Press the divider, move through `xs`, release, and report every step
fn replay_drag(pane: &mut SplitPane, width: f64, xs: &[f64]) {
    println!("start      left={:.2}", pane.left_percent());

    pane.handle(PointerEvent::Down);
    for &x in xs {
        match pane.handle(PointerEvent::Move { x, container_width: width }) {
            DragOutcome::Committed(left) => {
                println!("x={:<8} left={:.2} right={:.2}", x, left, 100.0 - left)
            }
            _ => println!("x={:<8} rejected (left stays {:.2})", x, pane.left_percent()),
        }
    }
    pane.handle(PointerEvent::Up);

    println!(
        "released   left={:.2} right={:.2}",
        pane.left_percent(),
        pane.right_percent()
    );
}
