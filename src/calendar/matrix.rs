use chrono::{Datelike, NaiveDate};

use crate::foundation::{
    core::{Weekday, validate_month, validate_year},
    error::{CalsvgError, CalsvgResult},
};

/// Index of the weekday that renders with the highlighted cell style (Sunday).
pub const HIGHLIGHT_WEEKDAY: usize = 6;

/// One week row of a [`WeekMatrix`]: seven slots, `None` for days outside the month.
pub type Week = [Option<u32>; 7];

/// A month of a specific year, viewed with a chosen first day of the week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub first_weekday: Weekday,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> CalsvgResult<Self> {
        validate_year(year)?;
        validate_month(month)?;
        Ok(Self {
            year,
            month,
            first_weekday,
        })
    }

    pub fn first_day(self) -> CalsvgResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            CalsvgError::validation(format!("invalid date {}-{:02}-01", self.year, self.month))
        })
    }

    pub fn days_in_month(self) -> CalsvgResult<u32> {
        let first = self.first_day()?;
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        // Only December of the last representable year has no successor.
        let days = match next {
            Some(next) => next.signed_duration_since(first).num_days(),
            None => 31,
        };
        u32::try_from(days).map_err(|_| CalsvgError::validation("month length out of range"))
    }

    /// Column (0..7) of day 1 under this month's `first_weekday`.
    pub fn leading_blanks(self) -> CalsvgResult<usize> {
        let wd = self.first_day()?.weekday().num_days_from_monday();
        let first = self.first_weekday.num_days_from_monday();
        Ok(((wd + 7 - first) % 7) as usize)
    }

    pub fn week_matrix(self) -> CalsvgResult<WeekMatrix> {
        let days = self.days_in_month()?;
        let mut weeks = Vec::<Week>::with_capacity(6);
        let mut week: Week = [None; 7];
        let mut col = self.leading_blanks()?;
        for day in 1..=days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col != 0 {
            weeks.push(week);
        }
        Ok(WeekMatrix {
            first_weekday: self.first_weekday,
            weeks,
        })
    }
}

/// Week-major grid of day numbers for one month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekMatrix {
    first_weekday: Weekday,
    weeks: Vec<Week>,
}

impl WeekMatrix {
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Weekday index (`0 = Monday`) shown in column `slot`.
    pub fn weekday_index(&self, slot: usize) -> usize {
        (slot + self.first_weekday.num_days_from_monday() as usize) % 7
    }

    pub fn is_highlighted(&self, slot: usize) -> bool {
        self.weekday_index(slot) == HIGHLIGHT_WEEKDAY
    }

    /// Real day numbers in reading order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().flatten().copied())
    }

    /// `(week_row, column)` of `day`, if it belongs to this month.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|slot| *slot == Some(day))
                .map(|col| (row, col))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/matrix.rs"]
mod tests;
