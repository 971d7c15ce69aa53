//! Trafficlight - terminal traffic light simulator
//!
//! CLI entry point: gathers lit times, then runs the light until Ctrl+C.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trafficlight::cli::prompt_missing;
use tokio_util::sync::CancellationToken;
use trafficlight::light::{NoOverrides, OverrideFile, OverrideSource};
use trafficlight::{DurationsConfig, LightConfig, PhaseCycler, TerminalScreen, TrafficLight};

/// Terminal traffic light simulator
///
/// Cycles red, yellow and green as ASCII art, holding each for its lit time.
/// Lit times not given as flags or in the config file are asked for.
#[derive(Parser, Debug)]
#[command(name = "trafficlight", version, about)]
struct Cli {
    /// Red lit time in seconds (5 to 600)
    #[arg(long)]
    red: Option<u64>,

    /// Yellow lit time in seconds (5 to 30)
    #[arg(long)]
    yellow: Option<u64>,

    /// Green lit time in seconds (5 to 600)
    #[arg(long)]
    green: Option<u64>,

    /// Path to a trafficlight.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override file re-read at the start of every cycle
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Line shown under each phase
    #[arg(long)]
    hint: Option<String>,

    /// Draw the lamps without color
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Lit times given on the command line
    const fn durations(&self) -> DurationsConfig {
        DurationsConfig {
            red: self.red,
            yellow: self.yellow,
            green: self.green,
        }
    }
}

/// Load the config file if one was given, defaults otherwise.
fn load_config(path: Option<&PathBuf>) -> Result<LightConfig> {
    path.map_or_else(
        || Ok(LightConfig::default()),
        |path| {
            LightConfig::from_path(path)
                .with_context(|| format!("Failed to load config from '{}'", path.display()))
        },
    )
}

/// Hint from the flag, falling back to the config file. Blank means none.
fn resolve_hint(flag: Option<&str>, config: &LightConfig) -> Option<String> {
    match flag {
        Some(hint) if hint.trim().is_empty() => None,
        Some(hint) => Some(hint.to_string()),
        None => config.hint().map(str::to_string),
    }
}

fn override_source(path: Option<PathBuf>) -> Box<dyn OverrideSource + Send> {
    match path {
        Some(path) => Box::new(OverrideFile::new(path)),
        None => Box::new(NoOverrides),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let known = cli.durations().or(config.durations);

    let timings = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        prompt_missing(&mut input, &mut output, known).context("Failed to read lit times")?
    };
    let light = TrafficLight::from_timings(timings).context("Invalid lit times")?;

    let mut cycler = PhaseCycler::new(light);
    if let Some(hint) = resolve_hint(cli.hint.as_deref(), &config) {
        cycler = cycler.with_hint(hint);
    }
    tracing::info!(timings = ?cycler.light().timings(), "starting traffic light");
    let colorize = config.display.color && !cli.no_color;
    let mut overrides = override_source(cli.overrides);

    let cancel = CancellationToken::new();
    let mut run = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            let mut screen = TerminalScreen::stdout(colorize);
            cycler.run(&mut screen, &cancel, &mut overrides).await
        }
    });

    tokio::select! {
        joined = &mut run => {
            let stopped = joined
                .context("Traffic light task panicked")?
                .context("Traffic light simulation failed")?;
            tracing::info!(?stopped, "traffic light finished");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            cancel.cancel();
            // Don't sit out the rest of the current hold.
            run.abort();
            println!("Exiting Traffic Light Simulator");
        }
    }

    Ok(())
}
