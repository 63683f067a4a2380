//! calsvg renders a single month or a whole year as an SVG calendar, with
//! per-day event titles loaded from CSV tables.
//!
//! # Pipeline overview
//!
//! 1. **Load**: an [`EventSource`] fills an [`EventIndex`] (`month -> day -> titles`)
//! 2. **Measure**: [`LayoutMetrics::compute`] derives one square cell size for the pass
//! 3. **Build**: [`Composer`] places one month tile, or twelve in a 3 x 4 grid
//! 4. **Serialize**: [`Canvas::to_svg`], optionally outlining text into paths
//!
//! The layout core is pure and deterministic: it never reads the clock and
//! equal inputs produce byte-identical SVG.
#![forbid(unsafe_code)]

mod calendar;
mod config;
mod events;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use calendar::matrix::{CalendarMonth, HIGHLIGHT_WEEKDAY, Week, WeekMatrix};
pub use config::{RenderOptions, Theme};
pub use events::emoji::EmojiMap;
pub use events::index::{Event, EventIndex, EventLabel, MonthEvents, PREFIX_SEPARATOR};
pub use events::source::{
    CATEGORY_EVENT_COLUMNS, CategoryTableSource, DATED_EVENT_COLUMNS, DirectoryScanSource,
    EMOJI_COLUMNS, EventSource, NoEvents, parse_iso_date,
};
pub use foundation::core::{
    Line, MONTHS_PER_YEAR, Point, Rect, Size, Vec2, WEEKDAYS, Weekday, validate_month,
    validate_year, weekday_from_index,
};
pub use foundation::error::{CalsvgError, CalsvgResult};
pub use layout::compose::{
    ANNUAL_COLUMNS, ANNUAL_ROWS, ANNUAL_TITLE_BAND, ANNUAL_WEEKDAY_BAND, Composer, TILE_GAP,
    TILE_WEEK_ROWS,
};
pub use layout::measure::{
    AVG_GLYPH_RATIO, FontMetricsEstimator, HeuristicEstimator, WidthEstimator,
};
pub use layout::metrics::{
    BASE_CELL_SIZE, BASE_PADDING, CANVAS_PADDING, DAY_FONT_SIZE, EVENT_FONT_SIZE,
    HEADER_FONT_SIZE, LINE_HEIGHT, LayoutMetrics, MetricsScope, WEEKDAY_FONT_SIZE,
};
pub use layout::month::{CELL_INSET, CELL_TEXT_INSET, GridContext, HeaderBands, build_month};
pub use pipeline::{
    CalendarKind, DEFAULT_OUTPUT_DIR, Rendered, WriteOutcome, default_file_name,
    default_output_path, ensure_parent_dir, render_calendar, write_artifact,
};
pub use render::canvas::Canvas;
pub use render::outline::{OutlineFonts, outline_or_keep, outline_text};
pub use render::primitive::{RenderPrimitive, TextAnchor, TextStyle};
