//! Airwatch - terminal dashboard for an environmental sensor
//!
//! Polls the sensor board (or a synthetic generator with `--demo`), keeps a
//! sliding window of readings and prints classification and forecasts after
//! every cycle. Set `RUST_LOG=debug` for per-request logging.

mod render;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::*;

use airwatch_connectors::{
    http::{HttpSource, HttpSourceConfig},
    SourceError, SyntheticSource,
};
use airwatch_core::{
    constants::defaults::MAX_POLYNOMIAL_DEGREE, CycleOutcome, Monitor, MonitorConfig,
    ReadingSource,
};

/// Longest idle sleep between schedule checks
const MAX_IDLE: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "airwatch")]
#[command(author = "Airwatch Contributors")]
#[command(version)]
#[command(about = "Environmental monitor with threshold classification and forecasting", long_about = None)]
struct Cli {
    /// Sensor device address
    #[arg(long, value_name = "IP", default_value = "192.168.137.91")]
    host: String,

    /// Use synthetic demo data instead of the device
    #[arg(long)]
    demo: bool,

    /// Seed for the demo generator
    #[arg(long, requires = "demo")]
    seed: Option<u64>,

    /// Seconds between updates
    #[arg(short, long, value_name = "SECS", default_value_t = 5,
          value_parser = clap::value_parser!(u64).range(3..=60))]
    interval: u64,

    /// Readings kept in history
    #[arg(long, value_name = "POINTS", default_value_t = 100,
          value_parser = clap::value_parser!(u64).range(10..=1000))]
    history: u64,

    /// Future points to predict
    #[arg(short, long, value_name = "POINTS", default_value_t = 5,
          value_parser = clap::value_parser!(u64).range(1..=20))]
    predict: u64,

    /// Polynomial degree of the forecast
    #[arg(long, default_value_t = 2,
          value_parser = clap::value_parser!(u64).range(1..=MAX_POLYNOMIAL_DEGREE as u64))]
    degree: u64,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5,
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Stop after this many update cycles
    #[arg(long, value_name = "N")]
    cycles: Option<u64>,

    /// Print the raw readings table
    #[arg(long)]
    raw: bool,
}

impl Cli {
    fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig::default()
            .with_capacity(self.history as usize)
            .with_predict_points(self.predict as usize)
            .with_degree(self.degree as usize)
            .with_update_interval_secs(self.interval as f64)
    }

    fn source(&self) -> Result<Box<dyn ReadingSource<Error = SourceError>>> {
        if self.demo {
            let source = match self.seed {
                Some(seed) => SyntheticSource::with_seed(seed),
                None => SyntheticSource::new(),
            };
            return Ok(Box::new(source));
        }

        let config = HttpSourceConfig::from_host(&self.host).timeout_secs(self.timeout);
        let source = HttpSource::new(config)
            .with_context(|| format!("invalid device address '{}'", self.host))?;
        Ok(Box::new(source))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli.source()?;
    let mut monitor = Monitor::with_system_clock(source, cli.monitor_config())
        .context("invalid monitor configuration")?;

    log::info!(
        "polling {} every {} s, keeping {} readings",
        monitor.source().describe(),
        cli.interval,
        cli.history
    );

    let options = render::RenderOptions { raw: cli.raw };
    let mut completed = 0u64;

    loop {
        if let Some(outcome) = monitor.poll_if_due() {
            completed += 1;
            if let CycleOutcome::NoNewData { reason } = &outcome {
                log::debug!("cycle {} produced no data: {}", completed, reason);
            }

            let view = monitor.dashboard();
            print!("{}", render::dashboard(&view, Local::now(), &options));

            if cli.cycles.is_some_and(|limit| completed >= limit) {
                break;
            }
        }

        let wait = Duration::from_millis(monitor.time_until_due());
        thread::sleep(wait.min(MAX_IDLE));
    }

    let stats = monitor.stats();
    log::info!(
        "stopped after {} cycles ({} readings, {} failures)",
        stats.cycles,
        stats.appended,
        stats.failures
    );
    Ok(())
}
