//! Inclusive calendar-day spans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

/// An inclusive `[start, end]` span of whole calendar days.
///
/// There is no time-of-day component, so the end day is covered for its full
/// 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Build a span, rejecting `end < start`.
    pub fn checked(start: NaiveDate, end: NaiveDate) -> SchedulerResult<Self> {
        if end < start {
            return Err(SchedulerError::InvertedRange);
        }
        Ok(DateRange { start, end })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn is_first_day(&self, day: NaiveDate) -> bool {
        self.start == day
    }

    pub fn is_multi_day(&self) -> bool {
        self.start != self.end
    }
}

/// Parse YYYY-MM-DD into a calendar day.
pub fn parse_day(s: &str) -> SchedulerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SchedulerError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s))
    })
}
