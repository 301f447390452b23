//! Month-precision record dates and their per-language display form.

use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

use crate::language::Language;

/// A `YYYY-MM` record date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    date: NaiveDate,
}

impl YearMonth {
    /// Build from a calendar year and a 1-based month.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|date| Self { date })
    }

    /// Parse `YYYY-MM`; a trailing `-DD` is accepted and ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().splitn(3, '-');
        let year = parts.next()?;
        let month = parts.next()?;
        if year.len() != 4 || !(1..=2).contains(&month.len()) {
            return None;
        }
        if let Some(day) = parts.next()
            && (day.is_empty() || !day.bytes().all(|byte| byte.is_ascii_digit()))
        {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// Render for display: `2023年05月` in Chinese, `May 2023` in English.
    #[must_use]
    pub fn format(self, language: Language) -> String {
        match language {
            Language::Zh => self.date.format("%Y年%m月").to_string(),
            Language::En => self.date.format("%B %Y").to_string(),
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.date.format("%Y-%m"))
    }
}

/// Format a raw record date, leaving unparsable input untouched.
#[must_use]
pub fn format_month(raw: &str, language: Language) -> String {
    YearMonth::parse(raw).map_or_else(|| raw.to_string(), |month| month.format(language))
}
