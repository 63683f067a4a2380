//! Canvas composition: one month tile, or twelve tiles in a 3 x 4 grid.

use crate::{
    calendar::matrix::CalendarMonth,
    config::{RenderOptions, Theme},
    events::index::{EventIndex, MonthEvents},
    foundation::{
        core::{MONTHS_PER_YEAR, Point, Rect, Size},
        error::CalsvgResult,
    },
    layout::{
        measure::WidthEstimator,
        metrics::LayoutMetrics,
        month::{GridContext, HeaderBands, build_month},
    },
    render::{canvas::Canvas, primitive::RenderPrimitive},
};

/// Horizontal gap between annual tile columns.
pub const TILE_GAP: f64 = 40.0;
/// Title band height of an annual tile.
pub const ANNUAL_TITLE_BAND: f64 = 56.0;
/// Weekday band height of an annual tile (when shown).
pub const ANNUAL_WEEKDAY_BAND: f64 = 28.0;
pub const ANNUAL_COLUMNS: u32 = 3;
pub const ANNUAL_ROWS: u32 = 4;
/// Week rows reserved in every annual tile, whether or not the month uses them.
pub const TILE_WEEK_ROWS: u32 = 6;

/// Lays out month grids onto a canvas using one precomputed [`LayoutMetrics`].
pub struct Composer<'a> {
    pub metrics: &'a LayoutMetrics,
    pub theme: &'a Theme,
    pub estimator: &'a dyn WidthEstimator,
    pub options: RenderOptions,
}

impl Composer<'_> {
    /// Bands for single-month mode: one cell for the title, one for weekday labels.
    pub fn month_bands(&self) -> HeaderBands {
        HeaderBands {
            title: self.metrics.cell_size,
            weekday: if self.options.show_weekday_header {
                self.metrics.cell_size
            } else {
                0.0
            },
        }
    }

    /// Bands for annual mode: the fixed header allowance.
    pub fn annual_bands(&self) -> HeaderBands {
        HeaderBands {
            title: ANNUAL_TITLE_BAND,
            weekday: if self.options.show_weekday_header {
                ANNUAL_WEEKDAY_BAND
            } else {
                0.0
            },
        }
    }

    pub fn month_canvas_size(&self, week_rows: usize) -> Size {
        let cell = self.metrics.cell_size;
        let pad = self.metrics.padding;
        let header_rows = if self.options.show_weekday_header { 2.0 } else { 1.0 };
        Size::new(
            7.0 * cell + 2.0 * pad,
            (week_rows as f64 + header_rows) * cell + 2.0 * pad,
        )
    }

    /// Footprint of one annual tile.
    pub fn tile_size(&self) -> Size {
        let cell = self.metrics.cell_size;
        Size::new(
            7.0 * cell,
            f64::from(TILE_WEEK_ROWS) * cell + self.annual_bands().height(),
        )
    }

    /// Top-left corner of the tile for `month` (1..=12), row-major.
    pub fn tile_origin(&self, month: u32) -> Point {
        let idx = month.saturating_sub(1);
        let (row, col) = (idx / ANNUAL_COLUMNS, idx % ANNUAL_COLUMNS);
        let tile = self.tile_size();
        let pad = self.metrics.padding;
        Point::new(
            pad + f64::from(col) * (tile.width + TILE_GAP),
            pad + f64::from(row) * tile.height,
        )
    }

    pub fn year_canvas_size(&self) -> Size {
        let tile = self.tile_size();
        let pad = self.metrics.padding;
        let cols = f64::from(ANNUAL_COLUMNS);
        Size::new(
            cols * tile.width + (cols - 1.0) * TILE_GAP + 2.0 * pad,
            f64::from(ANNUAL_ROWS) * tile.height + 2.0 * pad,
        )
    }

    #[tracing::instrument(skip(self, events))]
    pub fn compose_month(&self, year: i32, month: u32, events: &MonthEvents) -> CalsvgResult<Canvas> {
        let cal = CalendarMonth::new(year, month, self.options.first_weekday)?;
        let matrix = cal.week_matrix()?;
        let mut canvas = Canvas::new(self.month_canvas_size(matrix.week_count()));
        self.push_background(&mut canvas);

        let ctx = self.grid_context(self.month_bands());
        let pad = self.metrics.padding;
        canvas.extend(build_month(cal, &matrix, events, &ctx, Point::new(pad, pad)));
        Ok(canvas)
    }

    #[tracing::instrument(skip(self, index), fields(year = index.year()))]
    pub fn compose_year(&self, index: &EventIndex) -> CalsvgResult<Canvas> {
        let mut canvas = Canvas::new(self.year_canvas_size());
        self.push_background(&mut canvas);

        let ctx = self.grid_context(self.annual_bands());
        for month in 1..=MONTHS_PER_YEAR {
            let cal = CalendarMonth::new(index.year(), month, self.options.first_weekday)?;
            let matrix = cal.week_matrix()?;
            canvas.extend(build_month(
                cal,
                &matrix,
                index.month(month),
                &ctx,
                self.tile_origin(month),
            ));
        }
        Ok(canvas)
    }

    fn grid_context(&self, bands: HeaderBands) -> GridContext<'_> {
        GridContext {
            metrics: self.metrics,
            theme: self.theme,
            estimator: self.estimator,
            bands,
            show_weekday_header: self.options.show_weekday_header,
        }
    }

    fn push_background(&self, canvas: &mut Canvas) {
        if let Some(fill) = &self.theme.background {
            let size = canvas.size();
            canvas.push(RenderPrimitive::Rect {
                rect: Rect::from_origin_size(Point::ZERO, size),
                corner_radius: 0.0,
                fill: fill.clone(),
                opacity: 1.0,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/compose.rs"]
mod tests;
