//! njk CLI - render or precompile templates from the command line
//!
//! Usage: njk <GLOB> [DATA] [OPTIONS]
//!
//! Without `--render` templates are precompiled into JavaScript units;
//! with it they are rendered to HTML. `--watch` keeps re-rendering as
//! files under `--path` change.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use njk::config::resolve_from_disk;
use njk::{LocalFs, MinijinjaEngine, RenderUseCase, RunEvent, WatchController};

mod cli;
mod ui;

use cli::Cli;
use ui::context::UiContext;
use ui::views::render::{is_error_event, render_event, render_warning};
use ui::views::watch::{render_watch_event, render_watch_header};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ui = UiContext::new(cli.json, cli.color);

    match run(&cli, ui) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let event = RunEvent::Error {
                message: format!("{:#}", err),
            };
            print_event(&event, ui, false);
            ExitCode::FAILURE
        }
    }
}

/// Default level `warn`; each `-v` raises it one step. `RUST_LOG` wins.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,njk={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether the run succeeded; `Err` is a fatal startup error.
fn run(cli: &Cli, ui: UiContext) -> Result<bool> {
    let resolved = resolve_from_disk(&cli.flags())?;
    for warning in &resolved.warnings {
        tracing::debug!(key = %warning.key, "unknown configuration key");
        if !ui.json {
            eprint!(
                "{}",
                render_warning(&warning.to_string(), ui.color, ui.unicode)
            );
        }
    }

    let settings = resolved.settings;
    if settings.watch_requested() && !settings.watch_enabled() {
        tracing::warn!("--watch only applies to render mode (-r); running once");
    }

    let engine = MinijinjaEngine::from_settings(&settings)?;
    let watching = settings.watch_enabled();
    let root = settings.input_dir().display().to_string();
    let pattern = settings.glob_pattern().to_string();

    let emit = |event: RunEvent| print_event(&event, ui, watching);

    let mut render = RenderUseCase::new(settings, engine, LocalFs::new());
    let initial_ok = match render.render_matching(&emit) {
        Ok(report) => report.is_success(),
        Err(err) => {
            emit(RunEvent::Error {
                message: err.to_string(),
            });
            false
        }
    };

    if !watching {
        return Ok(initial_ok);
    }

    let mut controller = WatchController::new(render)?;
    let stop = controller.stop_handle();
    ctrlc::set_handler(move || stop.stop())?;

    if !ui.json {
        print!(
            "\n{}",
            render_watch_header(&root, &pattern, ui.color, ui.unicode)
        );
    }
    controller.start(&emit)?;
    controller.run(&emit)?;
    Ok(true)
}

fn print_event(event: &RunEvent, ui: UiContext, watching: bool) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    let line = if watching {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        render_watch_event(&timestamp, event, ui.color, ui.unicode)
    } else {
        render_event(event, ui.color, ui.unicode)
    };

    if is_error_event(event) {
        eprint!("{}", line);
    } else {
        print!("{}", line);
        let _ = std::io::stdout().flush();
    }
}
