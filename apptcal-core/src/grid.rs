//! Month grid construction.
//!
//! A month is laid out as a run of blank cells (the weekdays before the 1st)
//! followed by one cell per day. Trailing padding after the last day is left to
//! the renderer.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{SchedulerError, SchedulerResult};

/// One position in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridCell {
    /// Padding before the 1st of the month
    Blank,
    Day(NaiveDate),
}

impl GridCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(d) => Some(*d),
        }
    }
}

/// A calendar month, addressed by year and zero-based month index.
///
/// `cells()` can be called any number of times; each call starts a fresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month0: u32,
    week_start: Weekday,
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthGrid {
    /// Grid for `month0` (0 = January) of `year`, weeks starting on Sunday.
    pub fn new(year: i32, month0: u32) -> SchedulerResult<Self> {
        if month0 > 11 {
            return Err(SchedulerError::InvalidMonth(month0));
        }

        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or_else(|| SchedulerError::InvalidDate(format!("{}-{:02}-01", year, month0 + 1)))?;

        // Day zero of the following month is the last day of this one.
        let (next_year, next_month0) = if month0 == 11 { (year + 1, 0) } else { (year, month0 + 1) };
        let last = NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| SchedulerError::InvalidDate(format!("end of {}-{:02}", year, month0 + 1)))?;

        Ok(MonthGrid {
            year,
            month0,
            week_start: Weekday::Sun,
            first,
            last,
        })
    }

    /// Grid for the month containing `day`.
    pub fn containing(day: NaiveDate) -> SchedulerResult<Self> {
        Self::new(day.year(), day.month0())
    }

    /// Use a different weekday for grid column 0.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    /// Blank cells emitted before the 1st.
    pub fn leading_blanks(&self) -> u32 {
        let first = self.first.weekday().num_days_from_monday();
        let start = self.week_start.num_days_from_monday();
        (first + 7 - start) % 7
    }

    pub fn cell_count(&self) -> usize {
        (self.leading_blanks() + self.days_in_month()) as usize
    }

    /// "October 2026"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn next_month(&self) -> SchedulerResult<Self> {
        let (year, month0) = if self.month0 == 11 {
            (self.year + 1, 0)
        } else {
            (self.year, self.month0 + 1)
        };
        Ok(Self::new(year, month0)?.with_week_start(self.week_start))
    }

    pub fn prev_month(&self) -> SchedulerResult<Self> {
        let (year, month0) = if self.month0 == 0 {
            (self.year - 1, 11)
        } else {
            (self.year, self.month0 - 1)
        };
        Ok(Self::new(year, month0)?.with_week_start(self.week_start))
    }

    /// Weekday labels in column order, e.g. "Sun".."Sat".
    pub fn weekday_labels(&self) -> Vec<String> {
        let mut day = self.week_start;
        let mut labels = Vec::with_capacity(7);
        for _ in 0..7 {
            labels.push(short_name(day).to_string());
            day = day.succ();
        }
        labels
    }

    pub fn cells(&self) -> GridCells {
        GridCells {
            blanks_left: self.leading_blanks(),
            next_day: Some(self.first),
            last: self.last,
        }
    }
}

impl IntoIterator for &MonthGrid {
    type Item = GridCell;
    type IntoIter = GridCells;

    fn into_iter(self) -> GridCells {
        self.cells()
    }
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Lazy pass over a month's cells.
#[derive(Debug, Clone)]
pub struct GridCells {
    blanks_left: u32,
    next_day: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for GridCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.blanks_left > 0 {
            self.blanks_left -= 1;
            return Some(GridCell::Blank);
        }

        let day = self.next_day?;
        self.next_day = if day < self.last {
            Some(day + Duration::days(1))
        } else {
            None
        };
        Some(GridCell::Day(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let days = match self.next_day {
            Some(d) => ((self.last - d).num_days() + 1) as usize,
            None => 0,
        };
        let n = self.blanks_left as usize + days;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridCells {}
