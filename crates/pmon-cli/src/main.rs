use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pmon_core::{
    Config, ConfigError, Controls, CoreError, Session, Sink, Summary, SystemClock, Timer,
    TimerConfig, TimerSection,
};
use tracing_subscriber::EnvFilter;

/// Startup failures other than bad flags (clap already exits with 2 for
/// those), and I/O failures while running.
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "pmon",
    version,
    about = "Pomodoro timer for the terminal and status bars",
    after_help = "Send SIGUSR1 to pause or resume. Ctrl-C or SIGTERM stops the timer \
                  and prints time worked and time on break."
)]
struct Cli {
    /// Number of work sessions before a long break [default: 4]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    cycles: Option<u32>,

    /// Minutes per work session [default: 25]
    #[arg(short, long, value_name = "MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    work: Option<u64>,

    /// Minutes per short break [default: 5]
    #[arg(short, long, value_name = "MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    short_break: Option<u64>,

    /// Minutes per long break [default: 30]
    #[arg(short, long, value_name = "MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    long_break: Option<u64>,

    /// Write the countdown to this file instead of the terminal
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Read defaults from this TOML file instead of ~/.config/pmon/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> TimerSection {
        TimerSection {
            cycles: self.cycles,
            work_minutes: self.work,
            short_break_minutes: self.short_break,
            long_break_minutes: self.long_break,
            output: self.output.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PMON_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(summary) => {
            println!("\n{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<TimerConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.overrides().or(file.timer).into_timer_config()
}

/// Run the timer until a stop signal and return the closing totals.
fn run(cli: &Cli) -> Result<Summary, CoreError> {
    let config = resolve_config(cli)?;

    let controls = Controls::new();
    controls.install_signal_handlers()?;
    let sink = Sink::open(config.sink())?;
    tracing::info!(
        cycles = config.cycles(),
        sink = ?config.sink(),
        "starting"
    );

    let mut session = Session::new();
    let mut timer = Timer::new(config, sink, SystemClock, controls);
    timer.run(&mut session)?;
    timer.finish()?;

    let summary = session.summary();
    tracing::info!(
        worked_secs = summary.worked_secs,
        break_secs = summary.break_secs,
        "stopped"
    );
    Ok(summary)
}
