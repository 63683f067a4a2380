//! Visual theme and per-invocation render options.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Weekday,
    error::{CalsvgError, CalsvgResult},
};

/// Colors, fonts, and labels. Every field has a default, so a theme file only
/// lists what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub title_font_family: String,
    pub body_font_family: String,
    pub day_font_weight: String,
    pub text_fill: String,
    pub event_fill: String,
    pub cell_fill: String,
    pub highlight_fill: String,
    pub cell_opacity: f64,
    pub corner_radius: f64,
    pub separator_stroke: String,
    pub separator_width: f64,
    pub background: Option<String>,
    /// January first.
    pub month_names: Vec<String>,
    /// Monday first; rotated to the requested first weekday when rendered.
    pub weekday_labels: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_font_family: "serif".to_string(),
            body_font_family: "sans-serif".to_string(),
            day_font_weight: "300".to_string(),
            text_fill: "#000000".to_string(),
            event_fill: "#333333".to_string(),
            cell_fill: "#f2f2f2".to_string(),
            highlight_fill: "#ffd6d6".to_string(),
            cell_opacity: 1.0,
            corner_radius: 6.0,
            separator_stroke: "black".to_string(),
            separator_width: 1.0,
            background: None,
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(str::to_string)
            .to_vec(),
            weekday_labels: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
                .map(str::to_string)
                .to_vec(),
        }
    }
}

impl Theme {
    pub fn from_json_str(s: &str) -> CalsvgResult<Self> {
        let theme: Self = serde_json::from_str(s).map_err(|e| CalsvgError::serde(e.to_string()))?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn from_path(path: &Path) -> CalsvgResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read theme '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> CalsvgResult<()> {
        if self.month_names.len() != 12 {
            return Err(CalsvgError::validation(format!(
                "theme month_names must list 12 names, got {}",
                self.month_names.len()
            )));
        }
        if self.weekday_labels.len() != 7 {
            return Err(CalsvgError::validation(format!(
                "theme weekday_labels must list 7 labels, got {}",
                self.weekday_labels.len()
            )));
        }
        if !(0.0..=1.0).contains(&self.cell_opacity) {
            return Err(CalsvgError::validation("theme cell_opacity must be in [0, 1]"));
        }
        for (name, v) in [
            ("corner_radius", self.corner_radius),
            ("separator_width", self.separator_width),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CalsvgError::validation(format!(
                    "theme {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Name of `month` (1..=12); falls back to the month number.
    pub fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|i| self.month_names.get(i as usize))
            .cloned()
            .unwrap_or_else(|| month.to_string())
    }

    /// Weekday labels in column order for `first_weekday`.
    pub fn weekday_labels_from(&self, first_weekday: Weekday) -> Vec<String> {
        let mut labels = self.weekday_labels.clone();
        if labels.len() == 7 {
            labels.rotate_left(first_weekday.num_days_from_monday() as usize);
        }
        labels
    }
}

/// Feature switches resolved once per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub first_weekday: Weekday,
    pub show_weekday_header: bool,
    pub text_as_paths: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Mon,
            show_weekday_header: true,
            text_as_paths: false,
        }
    }
}
