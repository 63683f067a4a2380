//! Cell and header sizing derived from event content.
//!
//! Cells are square and share one size across the whole render pass: a single
//! month in month mode, all twelve months in annual mode.

use crate::{
    events::index::{EventIndex, MonthEvents},
    foundation::core::MONTHS_PER_YEAR,
    layout::measure::WidthEstimator,
};

/// Smallest cell edge; also the size used when no events are in scope.
pub const BASE_CELL_SIZE: f64 = 80.0;
/// Space inside a cell reserved for the day number and margins.
pub const BASE_PADDING: f64 = 32.0;
/// Height of one stacked event row.
pub const LINE_HEIGHT: f64 = 16.0;
pub const EVENT_FONT_SIZE: f64 = 12.0;
pub const HEADER_FONT_SIZE: f64 = 32.0;
pub const WEEKDAY_FONT_SIZE: f64 = 16.0;
pub const DAY_FONT_SIZE: f64 = 18.0;
/// Outer canvas margin.
pub const CANVAS_PADDING: f64 = 20.0;

/// Which events bound the cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricsScope {
    Month(u32),
    Year,
}

/// Immutable sizing for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub cell_size: f64,
    pub header_font_size: f64,
    pub weekday_font_size: f64,
    pub day_font_size: f64,
    /// Vertical distance between stacked event rows.
    pub day_spacing: f64,
    pub event_font_size: f64,
    pub padding: f64,
    pub max_event_lines: usize,
    pub max_title_width: f64,
}

impl LayoutMetrics {
    /// Metrics with no events in scope.
    pub fn base() -> Self {
        Self::from_bounds(0, 0.0)
    }

    pub fn compute(
        index: &EventIndex,
        scope: MetricsScope,
        estimator: &dyn WidthEstimator,
    ) -> Self {
        match scope {
            MetricsScope::Month(m) => Self::for_months([index.month(m)], estimator),
            MetricsScope::Year => {
                Self::for_months((1..=MONTHS_PER_YEAR).map(|m| index.month(m)), estimator)
            }
        }
    }

    /// Bound the cell size over every month yielded by `months`.
    pub fn for_months<'a>(
        months: impl IntoIterator<Item = &'a MonthEvents>,
        estimator: &dyn WidthEstimator,
    ) -> Self {
        let mut max_lines = 0usize;
        let mut max_width = 0.0f64;
        for month in months {
            max_lines = max_lines.max(month.max_events_per_day());
            for label in month.labels() {
                max_width = max_width.max(estimator.estimate_width(&label.display(), EVENT_FONT_SIZE));
            }
        }
        Self::from_bounds(max_lines, max_width)
    }

    fn from_bounds(max_event_lines: usize, max_title_width: f64) -> Self {
        let cell_height = BASE_CELL_SIZE.max(BASE_PADDING + max_event_lines as f64 * LINE_HEIGHT);
        let cell_width = BASE_CELL_SIZE.max(BASE_PADDING + max_title_width);
        Self {
            cell_size: cell_height.max(cell_width),
            header_font_size: HEADER_FONT_SIZE,
            weekday_font_size: WEEKDAY_FONT_SIZE,
            day_font_size: DAY_FONT_SIZE,
            day_spacing: LINE_HEIGHT,
            event_font_size: EVENT_FONT_SIZE,
            padding: CANVAS_PADDING,
            max_event_lines,
            max_title_width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
