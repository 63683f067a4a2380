use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::{
    events::{
        emoji::EmojiMap,
        index::{Event, EventLabel, MonthEvents},
    },
    foundation::{
        core::{MONTHS_PER_YEAR, validate_month},
        error::{CalsvgError, CalsvgResult},
    },
};

/// Required columns of the category event table.
pub const CATEGORY_EVENT_COLUMNS: [&str; 4] = ["month", "day", "title", "type"];
/// Required columns of the category decoration table.
pub const EMOJI_COLUMNS: [&str; 2] = ["type", "emoji"];
/// Required columns of every table visited by the directory scan.
pub const DATED_EVENT_COLUMNS: [&str; 2] = ["date", "title"];

/// Supplies the events of a month. Implementations skip malformed records
/// and fail only when a table's schema is violated.
pub trait EventSource {
    /// Short human-readable description used in logs.
    fn describe(&self) -> String;

    /// Events of `month` (1..=12) in `year`.
    fn load(&self, year: i32, month: u32) -> CalsvgResult<MonthEvents>;

    /// Events of every month in `year`, January first.
    fn load_year(&self, year: i32) -> CalsvgResult<Vec<MonthEvents>> {
        (1..=MONTHS_PER_YEAR).map(|m| self.load(year, m)).collect()
    }
}

/// A source that never yields events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn describe(&self) -> String {
        "no events".to_string()
    }

    fn load(&self, _year: i32, month: u32) -> CalsvgResult<MonthEvents> {
        validate_month(month)?;
        Ok(MonthEvents::new())
    }
}

#[derive(serde::Deserialize)]
struct CategoryRow {
    month: u32,
    day: u32,
    title: String,
    #[serde(rename = "type", default)]
    category: String,
}

#[derive(serde::Deserialize)]
struct EmojiRow {
    #[serde(rename = "type")]
    category: String,
    emoji: String,
}

#[derive(serde::Deserialize)]
struct DatedRow {
    date: String,
    title: String,
}

/// Recurring events from one table with explicit `month`/`day` columns,
/// decorated through an optional `type -> emoji` side table.
#[derive(Clone, Debug)]
pub struct CategoryTableSource {
    events_path: PathBuf,
    emoji_path: Option<PathBuf>,
}

impl CategoryTableSource {
    pub fn new(events_path: impl Into<PathBuf>, emoji_path: Option<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
            emoji_path,
        }
    }

    /// Read the decoration table. A missing file is an empty map.
    pub fn load_emoji(&self) -> CalsvgResult<EmojiMap> {
        match &self.emoji_path {
            Some(path) => read_emoji_table(path),
            None => Ok(EmojiMap::new()),
        }
    }

    fn read_events(&self, year: i32, month: u32, emoji: &EmojiMap) -> CalsvgResult<MonthEvents> {
        let mut out = MonthEvents::new();
        let Some(mut reader) = open_table(&self.events_path, &CATEGORY_EVENT_COLUMNS)? else {
            return Ok(out);
        };
        let headers = reader
            .headers()
            .with_context(|| format!("read headers of '{}'", self.events_path.display()))?
            .clone();

        let mut skipped = 0usize;
        for (idx, record) in reader.records().enumerate() {
            let parsed = record
                .map_err(|e| e.to_string())
                .and_then(|r| {
                    r.deserialize::<CategoryRow>(Some(&headers))
                        .map_err(|e| e.to_string())
                });
            let row = match parsed {
                Ok(row) => row,
                Err(reason) => {
                    skipped += 1;
                    report_skip(&self.events_path, idx, &reason);
                    continue;
                }
            };
            if row.month != month {
                continue;
            }
            if row.title.is_empty() {
                skipped += 1;
                report_skip(&self.events_path, idx, "empty title");
                continue;
            }
            if NaiveDate::from_ymd_opt(year, row.month, row.day).is_none() {
                skipped += 1;
                report_skip(
                    &self.events_path,
                    idx,
                    &format!("{year}-{:02}-{:02} is not a date", row.month, row.day),
                );
                continue;
            }
            let mut event = Event::new(row.day, row.title);
            if !row.category.is_empty() {
                event = event.with_category(row.category);
            }
            out.push(event.day, event.label(emoji));
        }
        if skipped > 0 {
            tracing::debug!(
                source = %self.events_path.display(),
                skipped,
                "skipped malformed event records"
            );
        }
        Ok(out)
    }
}

impl EventSource for CategoryTableSource {
    fn describe(&self) -> String {
        format!("category table '{}'", self.events_path.display())
    }

    fn load(&self, year: i32, month: u32) -> CalsvgResult<MonthEvents> {
        validate_month(month)?;
        let emoji = self.load_emoji()?;
        self.read_events(year, month, &emoji)
    }

    fn load_year(&self, year: i32) -> CalsvgResult<Vec<MonthEvents>> {
        let emoji = self.load_emoji()?;
        (1..=MONTHS_PER_YEAR)
            .map(|m| self.read_events(year, m, &emoji))
            .collect()
    }
}

/// Dated events from every `*.csv` table under a directory (or a single file).
#[derive(Clone, Debug)]
pub struct DirectoryScanSource {
    root: PathBuf,
}

impl DirectoryScanSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tables visited by the scan, in file-name order.
    pub fn tables(&self) -> CalsvgResult<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.is_dir() {
            tracing::debug!(root = %self.root.display(), "event directory not found");
            return Ok(Vec::new());
        }
        let rd = std::fs::read_dir(&self.root)
            .with_context(|| format!("list event directory '{}'", self.root.display()))?;
        let mut tables = Vec::new();
        for entry in rd {
            let path = entry
                .with_context(|| format!("read entry of event directory '{}'", self.root.display()))?
                .path();
            if !path.is_file() {
                continue;
            }
            let is_csv = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv {
                tables.push(path);
            }
        }
        tables.sort();
        Ok(tables)
    }

    fn scan(&self, year: i32) -> CalsvgResult<Vec<MonthEvents>> {
        let mut months = vec![MonthEvents::new(); MONTHS_PER_YEAR as usize];
        for table in self.tables()? {
            let Some(mut reader) = open_table(&table, &DATED_EVENT_COLUMNS)? else {
                continue;
            };
            let headers = reader
                .headers()
                .with_context(|| format!("read headers of '{}'", table.display()))?
                .clone();

            let mut skipped = 0usize;
            for (idx, record) in reader.records().enumerate() {
                let parsed = record
                    .map_err(|e| e.to_string())
                    .and_then(|r| {
                        r.deserialize::<DatedRow>(Some(&headers))
                            .map_err(|e| e.to_string())
                    })
                    .and_then(|row| {
                        if row.title.is_empty() {
                            return Err("empty title".to_string());
                        }
                        parse_iso_date(&row.date)
                            .map(|d| (d, row.title))
                            .ok_or_else(|| format!("'{}' is not an ISO date", row.date))
                    });
                let (date, title) = match parsed {
                    Ok(v) => v,
                    Err(reason) => {
                        skipped += 1;
                        report_skip(&table, idx, &reason);
                        continue;
                    }
                };
                if date.year() != year {
                    continue;
                }
                months[date.month0() as usize].push(date.day(), EventLabel::plain(title));
            }
            if skipped > 0 {
                tracing::debug!(
                    source = %table.display(),
                    skipped,
                    "skipped malformed event records"
                );
            }
        }
        Ok(months)
    }
}

impl EventSource for DirectoryScanSource {
    fn describe(&self) -> String {
        format!("dated tables under '{}'", self.root.display())
    }

    fn load(&self, year: i32, month: u32) -> CalsvgResult<MonthEvents> {
        validate_month(month)?;
        let mut months = self.scan(year)?;
        Ok(months.swap_remove(month as usize - 1))
    }

    fn load_year(&self, year: i32) -> CalsvgResult<Vec<MonthEvents>> {
        self.scan(year)
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by an ISO time part.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn read_emoji_table(path: &Path) -> CalsvgResult<EmojiMap> {
    let mut map = EmojiMap::new();
    let Some(mut reader) = open_table(path, &EMOJI_COLUMNS)? else {
        return Ok(map);
    };
    let headers = reader
        .headers()
        .with_context(|| format!("read headers of '{}'", path.display()))?
        .clone();
    for (idx, record) in reader.records().enumerate() {
        let parsed = record
            .map_err(|e| e.to_string())
            .and_then(|r| r.deserialize::<EmojiRow>(Some(&headers)).map_err(|e| e.to_string()));
        match parsed {
            Ok(row) => map.insert(&row.category, row.emoji),
            Err(reason) => report_skip(path, idx, &reason),
        }
    }
    Ok(map)
}

/// Open a CSV table and check its header row. `Ok(None)` when the file is absent.
fn open_table(path: &Path, required: &[&str]) -> CalsvgResult<Option<csv::Reader<std::fs::File>>> {
    if !path.exists() {
        tracing::debug!(source = %path.display(), "event table not found; treating as empty");
        return Ok(None);
    }
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open table '{}'", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers of '{}'", path.display()))?;
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CalsvgError::missing_columns(path.display(), &missing));
    }
    Ok(Some(reader))
}

fn report_skip(path: &Path, record_idx: usize, reason: &str) {
    tracing::debug!(
        source = %path.display(),
        record = record_idx + 1,
        reason,
        "skipping malformed event record"
    );
}

#[cfg(test)]
#[path = "../../tests/unit/events/source.rs"]
mod tests;
