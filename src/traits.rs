//! Traits for calendar, clock, and extraction abstraction

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::extraction::ParsedFieldMap;

/// Decides which calendar days count toward a business-day offset
pub trait BusinessCalendar: Send + Sync {
    /// Whether `date` is a business day
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Advance `date` by `days` business days.
    ///
    /// The starting date itself is never counted, so advancing by zero
    /// returns `date` unchanged.
    fn add_business_days(&self, date: NaiveDate, days: u32) -> NaiveDate {
        let mut current = date;
        let mut counted = 0;
        while counted < days {
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
            if self.is_business_day(current) {
                counted += 1;
            }
        }
        current
    }
}

/// Monday through Friday; no holiday table
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl BusinessCalendar for WeekendCalendar {
    fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Source of "today" for report generation
pub trait Clock: Send + Sync {
    /// Current calendar date, time-of-day discarded
    fn today(&self) -> NaiveDate;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Turns a free-text description into structured fields
pub trait FieldExtractor: Send + Sync {
    /// Extract recognized fields; never fails
    fn extract(&self, text: &str) -> ParsedFieldMap;
}
