use std::collections::BTreeMap;

use crate::{
    events::{emoji::EmojiMap, source::EventSource},
    foundation::{
        core::{MONTHS_PER_YEAR, validate_month, validate_year},
        error::{CalsvgError, CalsvgResult},
    },
};

/// Separator placed between a decorative prefix and the title text.
pub const PREFIX_SEPARATOR: &str = " ";

/// A single event record as read from a source, before decoration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub day: u32,
    pub title: String,
    pub category: Option<String>,
}

impl Event {
    pub fn new(day: u32, title: impl Into<String>) -> Self {
        Self {
            day,
            title: title.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Resolve the decorative prefix for this event's category.
    pub fn label(&self, emoji: &EmojiMap) -> EventLabel {
        let prefix = self
            .category
            .as_deref()
            .and_then(|c| emoji.prefix_for(c))
            .map(str::to_string);
        EventLabel {
            prefix,
            text: self.title.clone(),
        }
    }
}

/// A displayable event title, optionally carrying a decorative prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLabel {
    pub prefix: Option<String>,
    pub text: String,
}

impl EventLabel {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            prefix: None,
            text: text.into(),
        }
    }

    pub fn prefixed(prefix: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            text: text.into(),
        }
    }

    /// The title as a reader sees it: `prefix + separator + text`.
    pub fn display(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{p}{PREFIX_SEPARATOR}{}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Events of one month, keyed by day. Insertion order within a day is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthEvents {
    by_day: BTreeMap<u32, Vec<EventLabel>>,
}

impl MonthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: u32, label: EventLabel) {
        self.by_day.entry(day).or_default().push(label);
    }

    pub fn for_day(&self, day: u32) -> &[EventLabel] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn labels(&self) -> impl Iterator<Item = &EventLabel> + '_ {
        self.by_day.values().flatten()
    }

    /// Largest number of events attached to a single day.
    pub fn max_events_per_day(&self) -> usize {
        self.by_day.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.values().all(Vec::is_empty)
    }
}

/// Per-month events for one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventIndex {
    year: i32,
    months: BTreeMap<u32, MonthEvents>,
}

impl EventIndex {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: BTreeMap::new(),
        }
    }

    /// Load a single month from `source`.
    #[tracing::instrument(skip(source))]
    pub fn load_month(source: &dyn EventSource, year: i32, month: u32) -> CalsvgResult<Self> {
        validate_year(year)?;
        validate_month(month)?;
        let mut index = Self::new(year);
        index.months.insert(month, source.load(year, month)?);
        Ok(index)
    }

    /// Load all twelve months of `year` from `source`.
    #[tracing::instrument(skip(source))]
    pub fn load_year(source: &dyn EventSource, year: i32) -> CalsvgResult<Self> {
        validate_year(year)?;
        let months = source.load_year(year)?;
        if months.len() != MONTHS_PER_YEAR as usize {
            return Err(CalsvgError::validation(format!(
                "event source returned {} months for {year}, expected 12",
                months.len()
            )));
        }
        let mut index = Self::new(year);
        for (m, events) in (1..=MONTHS_PER_YEAR).zip(months) {
            index.months.insert(m, events);
        }
        Ok(index)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Add one labelled event. Used by sources and tests.
    pub fn push(&mut self, month: u32, day: u32, label: EventLabel) {
        self.months.entry(month).or_default().push(day, label);
    }

    /// Events for `month`; months not loaded are empty.
    pub fn month(&self, month: u32) -> &MonthEvents {
        static EMPTY: std::sync::OnceLock<MonthEvents> = std::sync::OnceLock::new();
        self.months
            .get(&month)
            .unwrap_or_else(|| EMPTY.get_or_init(MonthEvents::new))
    }

    pub fn months(&self) -> impl Iterator<Item = (u32, &MonthEvents)> + '_ {
        self.months.iter().map(|(m, e)| (*m, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/events/index.rs"]
mod tests;
