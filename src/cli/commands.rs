use std::io::{self, BufRead, IsTerminal};

use tracing::{debug, info, instrument};

use crate::application::{standard_console, Console};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Scene, Vec3};
use crate::infrastructure::MemoryScene;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if cli.config_template {
        output::info(&Settings::template());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }
    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let console: Console<MemoryScene> = standard_console(&settings)?;
    debug!("command tree:\n{}", console.tree());

    let mut scene = if cli.uninitialized {
        MemoryScene::new()
    } else {
        MemoryScene::initialized(Vec3::from(settings.gravity))
    };

    if !cli.execute.is_empty() {
        for line in &cli.execute {
            output::result(&console.run(line, &mut scene));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then_some(settings.prompt.as_str());
    let count = run_lines(&console, &mut scene, stdin.lock(), prompt)?;
    info!(count, "input closed");
    Ok(())
}

/// Dispatch every line of `input` until EOF, printing each result.
///
/// Empty lines are dispatched too. Returns the number of lines run.
#[instrument(level = "debug", skip_all)]
pub fn run_lines<S: Scene, R: BufRead>(
    console: &Console<S>,
    scene: &mut S,
    input: R,
    prompt: Option<&str>,
) -> CliResult<usize> {
    let mut count = 0;
    if let Some(p) = prompt {
        output::prompt(p);
    }
    for line in input.lines() {
        let line = line.map_err(|e| CliError::io("read input", e))?;
        output::result(&console.run(&line, scene));
        count += 1;
        if let Some(p) = prompt {
            output::prompt(p);
        }
    }
    Ok(count)
}
