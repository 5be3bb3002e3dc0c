//! `benchenv-probe` entry point.

use std::process::ExitCode;

use benchenv::cli::{CommandDispatcher, ProbeCli};
use benchenv::init_tracing;
use benchenv::shell::is_ci;
use benchenv::ui::{create_ui, OutputMode};
use clap::Parser;

fn main() -> ExitCode {
    let cli = ProbeCli::parse();
    init_tracing(cli.debug);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = std::env::current_dir().unwrap_or_default();
    // JSON goes to stdout untouched by color or headers.
    let interactive = !cli.json && !is_ci();
    let mut ui = create_ui(interactive, OutputMode::Normal);
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch_probe(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
