use crate::error::AppError;
use chrono::{DateTime, Datelike, Locale, NaiveDate, TimeZone, Utc};

/// Timestamp layout the Trading API expects for date filters.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Inclusive span of one calendar month, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The calendar month before `today`'s month.
pub fn previous_month(today: NaiveDate) -> u32 {
    if today.month() > 1 {
        today.month() - 1
    } else {
        12
    }
}

impl MonthRange {
    /// Resolve the search window for `month` (previous month when `None`).
    ///
    /// The year is taken from `today`, except that December always refers to
    /// the previous year.
    pub fn resolve(month: Option<u32>, today: NaiveDate) -> Result<Self, AppError> {
        let month = month.unwrap_or_else(|| previous_month(today));
        if !(1..=12).contains(&month) {
            return Err(AppError::Config(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        let year = if month == 12 {
            today.year() - 1
        } else {
            today.year()
        };

        let invalid = || AppError::Config(format!("cannot build a date for {}-{:02}", year, month));
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last = next_first.pred_opt().ok_or_else(invalid)?;

        let start = first.and_hms_milli_opt(0, 0, 0, 0).ok_or_else(invalid)?;
        let end = last.and_hms_milli_opt(23, 59, 59, 999).ok_or_else(invalid)?;

        Ok(Self {
            start: Utc.from_utc_datetime(&start),
            end: Utc.from_utc_datetime(&end),
        })
    }

    pub fn start_string(&self) -> String {
        self.start.format(API_TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_string(&self) -> String {
        self.end.format(API_TIMESTAMP_FORMAT).to_string()
    }

    /// Month name and year, e.g. "March 2024" or "marzo 2024".
    pub fn label(&self, locale: Locale) -> String {
        self.start.format_localized("%B %Y", locale).to_string()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
