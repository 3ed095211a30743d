use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use aerolife_core::MassEstimator;
use aerolife_ui::logging::{self, LogOptions};
use aerolife_ui::render::{self, OutputFormat, svg};
use aerolife_ui::{App, InputForm, Settings, interactive};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Life support mass estimates for human space missions.
///
/// Estimates the food, water and oxygen a crew needs for a mission, plus a
/// 20% safety margin, and prints the breakdown.
#[derive(Debug, Parser)]
#[command(name = "AeroLife", version, about)]
struct Cli {
    /// Crew size; clamped to 1-10.
    #[arg(long, allow_negative_numbers = true)]
    crew: Option<i64>,

    /// Mission duration in days; clamped to 1-1000.
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,

    /// Mission type: short-leo, medium-lunar or long-deep-space.
    #[arg(long)]
    mission: Option<String>,

    /// Recycling level: none, partial or high.
    #[arg(long)]
    recycling: Option<String>,

    /// Report format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the bar chart as SVG to this path.
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Read form changes from stdin and redraw after each one.
    #[arg(long)]
    interactive: bool,

    /// TOML settings file with form defaults, chart size and logging.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,aerolife_ui=debug`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(short, long)]
    quiet: bool,
}

// ─── form ────────────────────────────────────────────────────────────────────

/// Flags override the settings-file defaults, through the same clamping and
/// parsing as any other form input.
fn build_form(
    cli: &Cli,
    settings: &Settings,
) -> anyhow::Result<InputForm> {
    let mut form = InputForm::from_defaults(&settings.defaults);
    if let Some(crew) = cli.crew {
        form.set_crew_size(crew);
    }
    if let Some(days) = cli.days {
        form.set_duration_days(days);
    }
    if let Some(mission) = &cli.mission {
        form.set_mission_type(mission)?;
    }
    if let Some(recycling) = &cli.recycling {
        form.set_recycling_level(recycling)?;
    }
    Ok(form)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    logging::init_logging(&LogOptions {
        level: cli
            .log_level
            .as_deref()
            .or(settings.logging.level.as_deref()),
        file: cli.log_file.as_deref().or(settings.logging.file.as_deref()),
        console: !cli.quiet,
    })?;
    debug!(?cli, "starting");

    let estimator = MassEstimator::standard();
    let mut app = App::new(estimator, build_form(&cli, &settings)?);

    if cli.interactive {
        info!("interactive mode");
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        return interactive::run(&mut app, stdin.lock(), &mut stdout);
    }

    let report = app.compute()?;

    if let Some(path) = &cli.chart {
        svg::write_svg(path, &report.breakdown, settings.chart.size())?;
    }

    let rendered = render::render_report(&report, cli.format).context("failed to render report")?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
