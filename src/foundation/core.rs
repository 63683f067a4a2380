use crate::foundation::error::{CalsvgError, CalsvgResult};

pub use chrono::Weekday;
pub use kurbo::{Line, Point, Rect, Size, Vec2};

/// Weekdays in index order, `0 = Monday` through `6 = Sunday`.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Number of months in a year; also the number of tiles on an annual canvas.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Map a weekday index (`0 = Monday` .. `6 = Sunday`) to a [`Weekday`].
pub fn weekday_from_index(idx: u8) -> CalsvgResult<Weekday> {
    WEEKDAYS
        .get(usize::from(idx))
        .copied()
        .ok_or_else(|| CalsvgError::validation(format!("weekday index {idx} is outside 0..=6")))
}

/// Check that `month` is in `1..=12`.
pub fn validate_month(month: u32) -> CalsvgResult<u32> {
    if (1..=MONTHS_PER_YEAR).contains(&month) {
        Ok(month)
    } else {
        Err(CalsvgError::validation(format!(
            "month {month} is outside 1..=12"
        )))
    }
}

/// Check that `year` can be represented by the date library.
pub fn validate_year(year: i32) -> CalsvgResult<i32> {
    if chrono::NaiveDate::from_ymd_opt(year, 1, 1).is_some()
        && chrono::NaiveDate::from_ymd_opt(year, 12, 31).is_some()
    {
        Ok(year)
    } else {
        Err(CalsvgError::validation(format!(
            "year {year} is outside the supported date range"
        )))
    }
}
