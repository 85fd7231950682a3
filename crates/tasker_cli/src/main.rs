mod cli;
mod console;
mod menu;
mod theme;

use clap::Parser;
use cli::Cli;
use console::Console;
use std::io::{self, BufRead, Write};
use tasker_core::error::AppError;
use tasker_core::model::Task;

fn main() {
    let cli = Cli::parse();
    let palette = if cli.plain {
        theme::Palette::plain()
    } else {
        theme::palette_for_theme(cli.theme.as_deref())
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), palette, !cli.plain);

    if let Err(err) = run(&mut console, &cli.name) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

/// The session loop: the task list and the continue flag live here and are
/// replaced wholesale by each action's outcome.
fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, name: &str) -> Result<(), AppError> {
    let mut tasks: Vec<Task> = Vec::new();
    let mut keep_running = true;

    while keep_running {
        let outcome = menu::main_menu(console, tasks, name)?;
        tasks = outcome.tasks;
        keep_running = outcome.keep_running;
    }

    console.line("")?;
    console.line("Goodbye!")?;
    Ok(())
}
