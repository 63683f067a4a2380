use crate::{
    calendar::matrix::{CalendarMonth, WeekMatrix},
    config::Theme,
    events::index::{EventLabel, MonthEvents, PREFIX_SEPARATOR},
    foundation::core::{Line, Point, Rect},
    layout::{
        measure::WidthEstimator,
        metrics::{BASE_PADDING, LayoutMetrics},
    },
    render::primitive::{RenderPrimitive, TextAnchor, TextStyle},
};

/// Gap between a cell's background and its grid slot, on every side.
pub const CELL_INSET: f64 = 2.0;
/// Distance from a cell's left and top edges to its text.
pub const CELL_TEXT_INSET: f64 = 6.0;
/// Baseline offset as a fraction of font size, for vertically centered text.
const CENTER_BASELINE_RATIO: f64 = 0.35;

/// Vertical space above the day grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderBands {
    pub title: f64,
    /// Zero when the weekday header is hidden.
    pub weekday: f64,
}

impl HeaderBands {
    pub fn height(self) -> f64 {
        self.title + self.weekday
    }
}

/// Shared, read-only inputs for building month grids in one render pass.
pub struct GridContext<'a> {
    pub metrics: &'a LayoutMetrics,
    pub theme: &'a Theme,
    pub estimator: &'a dyn WidthEstimator,
    pub bands: HeaderBands,
    pub show_weekday_header: bool,
}

impl GridContext<'_> {
    fn text_style(
        &self,
        font_size: f64,
        family: &str,
        weight: &str,
        anchor: TextAnchor,
        fill: &str,
    ) -> TextStyle {
        TextStyle {
            font_size,
            font_family: family.to_string(),
            font_weight: weight.to_string(),
            anchor,
            fill: fill.to_string(),
        }
    }
}

/// Emit the primitives of one month tile whose top-left corner is `origin`.
///
/// Order: title, weekday labels and separator (if shown), then per day its
/// background, day number, and event titles. Rows advance by exactly one cell.
pub fn build_month(
    month: CalendarMonth,
    matrix: &WeekMatrix,
    events: &MonthEvents,
    ctx: &GridContext<'_>,
    origin: Point,
) -> Vec<RenderPrimitive> {
    let cell = ctx.metrics.cell_size;
    let grid_width = 7.0 * cell;
    let mut out = Vec::with_capacity(2 + 8 + matrix.week_count() * 7 * 3 + events.len() * 2);

    let title_baseline = origin.y
        + ctx.bands.title * 0.5
        + ctx.metrics.header_font_size * CENTER_BASELINE_RATIO;
    out.push(RenderPrimitive::Text {
        pos: Point::new(origin.x + grid_width * 0.5, title_baseline),
        content: format!("{} {}", ctx.theme.month_name(month.month), month.year),
        style: ctx.text_style(
            ctx.metrics.header_font_size,
            &ctx.theme.title_font_family,
            "normal",
            TextAnchor::Middle,
            &ctx.theme.text_fill,
        ),
    });

    if ctx.show_weekday_header {
        let band_top = origin.y + ctx.bands.title;
        let baseline = band_top
            + ctx.bands.weekday * 0.5
            + ctx.metrics.weekday_font_size * CENTER_BASELINE_RATIO;
        let style = ctx.text_style(
            ctx.metrics.weekday_font_size,
            &ctx.theme.body_font_family,
            "normal",
            TextAnchor::Middle,
            &ctx.theme.text_fill,
        );
        for (col, label) in ctx
            .theme
            .weekday_labels_from(matrix.first_weekday())
            .into_iter()
            .enumerate()
        {
            out.push(RenderPrimitive::Text {
                pos: Point::new(origin.x + col as f64 * cell + cell * 0.5, baseline),
                content: label,
                style: style.clone(),
            });
        }
        let line_y = band_top + ctx.bands.weekday;
        out.push(RenderPrimitive::Line {
            line: Line::new((origin.x, line_y), (origin.x + grid_width, line_y)),
            stroke: ctx.theme.separator_stroke.clone(),
            width: ctx.theme.separator_width,
        });
    }

    let day_style = ctx.text_style(
        ctx.metrics.day_font_size,
        &ctx.theme.body_font_family,
        &ctx.theme.day_font_weight,
        TextAnchor::Start,
        &ctx.theme.text_fill,
    );
    let event_style = ctx.text_style(
        ctx.metrics.event_font_size,
        &ctx.theme.body_font_family,
        "normal",
        TextAnchor::Start,
        &ctx.theme.event_fill,
    );

    let mut y = origin.y + ctx.bands.height();
    for week in matrix.weeks() {
        for (col, slot) in week.iter().enumerate() {
            let Some(day) = *slot else {
                continue;
            };
            let x = origin.x + col as f64 * cell;
            let fill = if matrix.is_highlighted(col) {
                &ctx.theme.highlight_fill
            } else {
                &ctx.theme.cell_fill
            };
            out.push(RenderPrimitive::Rect {
                rect: Rect::new(
                    x + CELL_INSET,
                    y + CELL_INSET,
                    x + cell - CELL_INSET,
                    y + cell - CELL_INSET,
                ),
                corner_radius: ctx.theme.corner_radius,
                fill: fill.clone(),
                opacity: ctx.theme.cell_opacity,
            });
            out.push(RenderPrimitive::Text {
                pos: Point::new(
                    x + CELL_TEXT_INSET,
                    y + CELL_TEXT_INSET + ctx.metrics.day_font_size,
                ),
                content: day.to_string(),
                style: day_style.clone(),
            });
            for (row, label) in events.for_day(day).iter().enumerate() {
                let baseline = y
                    + BASE_PADDING
                    + row as f64 * ctx.metrics.day_spacing
                    + ctx.metrics.event_font_size;
                let pos = Point::new(x + CELL_TEXT_INSET, baseline);
                push_event(&mut out, label, pos, &event_style, ctx);
            }
        }
        y += cell;
    }
    out
}

/// A prefixed title is two glyph runs on one baseline, prefix first.
fn push_event(
    out: &mut Vec<RenderPrimitive>,
    label: &EventLabel,
    pos: Point,
    style: &TextStyle,
    ctx: &GridContext<'_>,
) {
    let mut text_x = pos.x;
    if let Some(prefix) = &label.prefix {
        out.push(RenderPrimitive::Text {
            pos,
            content: prefix.clone(),
            style: style.clone(),
        });
        let lead = format!("{prefix}{PREFIX_SEPARATOR}");
        text_x += ctx.estimator.estimate_width(&lead, style.font_size);
    }
    out.push(RenderPrimitive::Text {
        pos: Point::new(text_x, pos.y),
        content: label.text.clone(),
        style: style.clone(),
    });
}

#[cfg(test)]
#[path = "../../tests/unit/layout/month.rs"]
mod tests;
