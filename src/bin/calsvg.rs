use std::{
    io::{BufRead as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::Datelike as _;
use clap::Parser;

use calsvg::{
    CalendarKind, CategoryTableSource, DirectoryScanSource, EventSource, FontMetricsEstimator,
    HeuristicEstimator, NoEvents, OutlineFonts, RenderOptions, Theme, WidthEstimator,
    WriteOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "calsvg", version, about = "Render a month or year calendar as SVG")]
struct Cli {
    /// Calendar year (default: current year).
    #[arg(long)]
    year: Option<i32>,

    /// Month 1-12 (default: current month). Ignored with --annual.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), conflicts_with = "annual")]
    month: Option<u32>,

    /// First day of the week, 0=Monday .. 6=Sunday.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=6))]
    start_day: u8,

    /// Output SVG path (default: output/calendar_monthly_YYYY-MM.svg or output/calendar_annual_YYYY.svg).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Convert text to outline paths.
    #[arg(long)]
    paths: bool,

    /// Hide the weekday label row.
    #[arg(long)]
    no_weekday_header: bool,

    /// Render all twelve months on one canvas.
    #[arg(long)]
    annual: bool,

    /// Event table with month,day,title,type columns.
    #[arg(long, conflicts_with = "events_dir")]
    events: Option<PathBuf>,

    /// Decoration table with type,emoji columns (used with --events).
    #[arg(long, requires = "events")]
    emoji: Option<PathBuf>,

    /// Directory of CSV tables with date,title columns.
    #[arg(long)]
    events_dir: Option<PathBuf>,

    /// Theme JSON overriding colors, fonts, and labels.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Font file used to measure event titles (and to outline text with --paths).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Overwrite the output without asking.
    #[arg(long)]
    overwrite: bool,

    /// Report skipped event records and layout details.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let today = chrono::Local::now().date_naive();
    let year = cli.year.unwrap_or_else(|| today.year());
    let kind = if cli.annual {
        CalendarKind::Annual
    } else {
        CalendarKind::Month(cli.month.unwrap_or_else(|| today.month()))
    };

    let options = RenderOptions {
        first_weekday: calsvg::weekday_from_index(cli.start_day)?,
        show_weekday_header: !cli.no_weekday_header,
        text_as_paths: cli.paths,
    };
    let theme = match &cli.theme {
        Some(path) => Theme::from_path(path)?,
        None => Theme::default(),
    };

    let source: Box<dyn EventSource> = match (&cli.events, &cli.events_dir) {
        (Some(events), _) => Box::new(CategoryTableSource::new(events, cli.emoji.clone())),
        (None, Some(dir)) => Box::new(DirectoryScanSource::new(dir)),
        (None, None) => Box::new(NoEvents),
    };
    let estimator: Box<dyn WidthEstimator> = match &cli.font {
        Some(path) => {
            let est = FontMetricsEstimator::from_path(path)?;
            tracing::debug!(family = est.family_name(), "measuring titles with supplied font");
            Box::new(est)
        }
        None => Box::new(HeuristicEstimator),
    };

    let rendered = calsvg::render_calendar(
        source.as_ref(),
        year,
        kind,
        &theme,
        options,
        estimator.as_ref(),
    )?;
    let fonts = OutlineFonts {
        load_system_fonts: true,
        extra_font_files: cli.font.iter().cloned().collect(),
    };
    let svg = rendered.to_svg(&fonts);

    let out = cli
        .output
        .clone()
        .unwrap_or_else(|| calsvg::default_output_path(year, kind));
    match calsvg::write_artifact(&out, &svg, cli.overwrite, &mut confirm_overwrite)? {
        WriteOutcome::Written(path) => eprintln!("wrote {}", path.display()),
        WriteOutcome::Cancelled => eprintln!("cancelled; '{}' left unchanged", out.display()),
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn confirm_overwrite(path: &Path) -> bool {
    prompt_yes_no(&format!("'{}' exists. Overwrite? [y/N] ", path.display())).unwrap_or(false)
}

fn prompt_yes_no(question: &str) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr();
    stderr.write_all(question.as_bytes()).context("write prompt")?;
    stderr.flush().context("flush prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("read answer")?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
