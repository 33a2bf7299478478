use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use solar_mission_planner::config::{PlannerConfig, load_bodies, load_planner_config};
use solar_mission_planner::export::{self, positions::Record};
use solar_mission_planner::transfer::{MissionError, MissionReport, Planner};
use tracing_subscriber::EnvFilter;

#[path = "planner/display.rs"]
mod display;
#[path = "planner/prompt.rs"]
mod prompt;

/// Heliocentric planet positions with optional Hohmann transfer planning.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solar system positions and Hohmann launch-window planner"
)]
struct Cli {
    /// Target planet name (case-insensitive)
    #[arg(long, conflicts_with = "interactive")]
    target: Option<String>,

    /// Instant to compute for (RFC 3339 or YYYY-MM-DD, UTC); defaults to now
    #[arg(long, value_parser = parse_instant)]
    at: Option<DateTime<Utc>>,

    /// Planner settings file (YAML or TOML); defaults to the built-in table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace the body table (YAML list, TOML record, or directory of TOML records)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Prompt for the target planet on stdin
    #[arg(long, default_value_t = false)]
    interactive: bool,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write body positions as CSV (use '-' for stdout)
    #[arg(long)]
    positions_csv: Option<PathBuf>,

    /// Print the physical Hohmann Δv estimate (km/s)
    #[arg(long, default_value_t = false)]
    estimate_dv: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let planner = Planner::from_config(&config).context("invalid body table")?;
    let instant = cli.at.unwrap_or_else(Utc::now);

    let target = if cli.interactive {
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        prompt::ask_target(&planner, &mut stdin.lock(), &mut stderr)?
    } else {
        cli.target.clone()
    };

    tracing::info!(
        bodies = planner.ephemeris().table().len(),
        %instant,
        requested = target.as_deref().unwrap_or("-"),
        "computing report"
    );
    let report = plan_or_degrade(&planner, instant, target.as_deref())?;

    if let Some(path) = &cli.positions_csv {
        write_positions(path, &report)
            .with_context(|| format!("failed to write positions to {}", path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            display::render(
                &mut stdout,
                &report,
                planner.ephemeris().table(),
                cli.estimate_dv,
            )?;
            stdout.flush()?;
        }
        OutputFormat::Json => export::json::write_report(&mut stdout, &report)?,
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<PlannerConfig> {
    let config = match &cli.config {
        Some(path) => load_planner_config(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => PlannerConfig::builtin()?,
    };
    Ok(match &cli.bodies {
        Some(path) => config.with_bodies(
            load_bodies(path)
                .with_context(|| format!("failed to load bodies from {}", path.display()))?,
        ),
        None => config,
    })
}

/// Plan the requested mission; rejected targets degrade to a positions-only report.
fn plan_or_degrade(
    planner: &Planner,
    instant: DateTime<Utc>,
    target: Option<&str>,
) -> anyhow::Result<MissionReport> {
    let name = target.unwrap_or_default();
    let rejected = match planner.plan_or_positions(instant, target) {
        Ok(report) => return Ok(report),
        Err(rejected) => rejected,
    };
    if rejected.error.is_unknown_body() {
        eprintln!("Invalid planet '{name}'. Showing regular solar system view.");
        tracing::warn!(err = %rejected.error, "target rejected");
    } else if let MissionError::Transfer(err) = &rejected.error {
        eprintln!(
            "Cannot plan a transfer from {} to '{name}': {err}. Showing regular solar system view.",
            planner.origin().name()
        );
    } else {
        return Err(rejected.error.into());
    }
    Ok(*rejected.report)
}

fn write_positions(path: &Path, report: &MissionReport) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(path)?;
    let records = report.positions.iter().map(|pos| Record {
        body: &pos.body,
        angle_rad: pos.angle_rad,
        angle_deg: pos.angle_rad.to_degrees(),
        x_au: pos.x_au,
        y_au: pos.y_au,
        radius_au: pos.radius_au,
        period_years: pos.period_years,
    });
    export::positions::write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("expected RFC 3339 timestamp or YYYY-MM-DD, got '{raw}'"))
}
