use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::{RenderOptions, Theme},
    events::{index::EventIndex, source::EventSource},
    foundation::{core::validate_month, error::CalsvgResult},
    layout::{
        compose::Composer,
        measure::WidthEstimator,
        metrics::{LayoutMetrics, MetricsScope},
    },
    render::{
        canvas::Canvas,
        outline::{OutlineFonts, outline_or_keep},
    },
};

/// Directory used when no output path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// What to render for a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarKind {
    Month(u32),
    Annual,
}

/// A finished render pass: the primitive buffer and the metrics that sized it.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub canvas: Canvas,
    pub metrics: LayoutMetrics,
    pub options: RenderOptions,
}

impl Rendered {
    /// Serialize the canvas, outlining text when requested.
    pub fn to_svg(&self, fonts: &OutlineFonts) -> String {
        let svg = self.canvas.to_svg();
        if self.options.text_as_paths {
            outline_or_keep(svg, fonts)
        } else {
            svg
        }
    }
}

/// Load events, size cells, and compose the canvas for `kind`.
///
/// Steps run strictly in order: load, measure, build, and the caller serializes.
#[tracing::instrument(skip(source, theme, estimator), fields(events = %source.describe()))]
pub fn render_calendar(
    source: &dyn EventSource,
    year: i32,
    kind: CalendarKind,
    theme: &Theme,
    options: RenderOptions,
    estimator: &dyn WidthEstimator,
) -> CalsvgResult<Rendered> {
    theme.validate()?;
    let (index, scope) = match kind {
        CalendarKind::Month(month) => {
            validate_month(month)?;
            (
                EventIndex::load_month(source, year, month)?,
                MetricsScope::Month(month),
            )
        }
        CalendarKind::Annual => (EventIndex::load_year(source, year)?, MetricsScope::Year),
    };

    let metrics = LayoutMetrics::compute(&index, scope, estimator);
    let composer = Composer {
        metrics: &metrics,
        theme,
        estimator,
        options,
    };
    let canvas = match kind {
        CalendarKind::Month(month) => composer.compose_month(year, month, index.month(month))?,
        CalendarKind::Annual => composer.compose_year(&index)?,
    };

    tracing::info!(
        cell_size = metrics.cell_size,
        max_event_lines = metrics.max_event_lines,
        width = canvas.size().width,
        height = canvas.size().height,
        primitives = canvas.len(),
        "calendar composed"
    );
    Ok(Rendered {
        canvas,
        metrics,
        options,
    })
}

/// `calendar_monthly_{year}-{month:02}.svg` or `calendar_annual_{year}.svg`.
pub fn default_file_name(year: i32, kind: CalendarKind) -> String {
    match kind {
        CalendarKind::Month(month) => format!("calendar_monthly_{year}-{month:02}.svg"),
        CalendarKind::Annual => format!("calendar_annual_{year}.svg"),
    }
}

pub fn default_output_path(year: i32, kind: CalendarKind) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(default_file_name(year, kind))
}

pub fn ensure_parent_dir(path: &Path) -> CalsvgResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The output existed and overwriting was declined; nothing was written.
    Cancelled,
}

/// Write `contents` to `path`. An existing file is replaced only when
/// `overwrite` is set or `confirm` accepts.
pub fn write_artifact(
    path: &Path,
    contents: &str,
    overwrite: bool,
    confirm: &mut dyn FnMut(&Path) -> bool,
) -> CalsvgResult<WriteOutcome> {
    if path.exists() && !overwrite && !confirm(path) {
        tracing::info!(path = %path.display(), "overwrite declined");
        return Ok(WriteOutcome::Cancelled);
    }
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    Ok(WriteOutcome::Written(path.to_path_buf()))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
