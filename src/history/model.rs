use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Month and year the history feed is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryPeriod {
    month: u32,
    year: i32,
}

impl HistoryPeriod {
    /// `None` unless `month` is in `1..=12`.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The current month in local time.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
