use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::{HarnessError, Result};
use crate::script::{Replay, Script};

#[derive(Debug, Parser)]
#[command(
    name = "duoslider-harness",
    about = "Replay pointer gestures against a range slider and print its labels",
    version
)]
pub struct Cli {
    /// JSON gesture script. The built-in demo gesture runs when omitted.
    pub script: Option<PathBuf>,

    /// Print only the final labels.
    #[arg(long)]
    pub quiet: bool,

    /// Print the resolved script as JSON and exit.
    #[arg(long)]
    pub dump_script: bool,

    /// Emit logs as JSON lines.
    #[cfg(feature = "tracing-json")]
    #[arg(long)]
    pub json_logs: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(cli, &mut std::io::stdout().lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };

    if cli.dump_script {
        let json = serde_json::to_string_pretty(&script)?;
        writeln!(out, "{json}").map_err(HarnessError::Output)?;
        return Ok(());
    }

    let replay = script.replay()?;
    print_replay(&replay, cli.quiet, out).map_err(HarnessError::Output)
}

fn print_replay(replay: &Replay, quiet: bool, out: &mut impl Write) -> std::io::Result<()> {
    if !quiet {
        writeln!(out, "initial  {}", replay.initial)?;
        for frame in &replay.frames {
            writeln!(out, "#{:<7} {}", frame.index, frame.labels)?;
        }
    }
    writeln!(out, "final    {}", replay.final_labels)?;
    if replay.ignored > 0 && !quiet {
        writeln!(out, "ignored  {} sample(s)", replay.ignored)?;
    }
    Ok(())
}

fn init_tracing(_cli: &Cli) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    #[cfg(feature = "tracing-json")]
    if _cli.json_logs {
        let _ = builder.json().try_init();
        return;
    }

    let _ = builder.try_init();
}
