//! FRRA (annual reserve fund) payment-date forecasting
//!
//! The fund settles on December 1st. A reference date on or after this
//! year's December 1st rolls over to next year's, and the grace period is
//! then added in business days.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;

use crate::config::FrraConfig;
use crate::traits::*;
use crate::types::*;

/// Month of the FRRA settlement anchor
pub const FRRA_ANCHOR_MONTH: u32 = 12;
/// Day of the FRRA settlement anchor
pub const FRRA_ANCHOR_DAY: u32 = 1;

/// December 1st of `year`, saturating at the end of the supported range
fn december_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, FRRA_ANCHOR_MONTH, FRRA_ANCHOR_DAY).unwrap_or(NaiveDate::MAX)
}

/// Forecasts when the FRRA payment is due
#[derive(Debug, Clone, Default)]
pub struct DateForecastEngine<C: BusinessCalendar = WeekendCalendar> {
    calendar: C,
}

impl DateForecastEngine<WeekendCalendar> {
    /// Create an engine that skips weekends only
    pub fn new() -> Self {
        Self {
            calendar: WeekendCalendar,
        }
    }
}

impl<C: BusinessCalendar> DateForecastEngine<C> {
    /// Create an engine over a custom business calendar
    pub fn with_calendar(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar used to count business days
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The December 1st anchor for `reference`.
    ///
    /// Strictly before this year's anchor keeps it; on or after rolls to
    /// next year's.
    pub fn base_date(&self, reference: NaiveDate) -> NaiveDate {
        let this_year = december_first(reference.year());
        if reference < this_year {
            this_year
        } else {
            december_first(reference.year() + 1)
        }
    }

    /// Forecast the payment date for `reference` with a grace period of
    /// `business_day_offset` business days
    pub fn forecast(&self, reference: NaiveDate, business_day_offset: u32) -> NaiveDate {
        let base = self.base_date(reference);
        let payment = self.calendar.add_business_days(base, business_day_offset);
        debug!(
            "FRRA forecast: reference={} base={} offset={} payment={}",
            reference, base, business_day_offset, payment
        );
        payment
    }

    /// Forecast from a timestamp; the time of day is discarded
    pub fn forecast_at(&self, reference: NaiveDateTime, business_day_offset: u32) -> NaiveDate {
        self.forecast(reference.date(), business_day_offset)
    }

    /// Forecast using the grace period from configuration
    pub fn forecast_with_config(&self, reference: NaiveDate, config: &FrraConfig) -> NaiveDate {
        self.forecast(reference, config.grace_business_days)
    }

    /// Forecast relative to the date reported by `clock`
    pub fn forecast_today<K: Clock>(&self, clock: &K, business_day_offset: u32) -> NaiveDate {
        self.forecast(clock.today(), business_day_offset)
    }

    /// Forecast along with the anchor it was derived from
    pub fn explain(&self, reference: NaiveDate, business_day_offset: u32) -> FrraForecast {
        let base_date = self.base_date(reference);
        FrraForecast {
            reference_date: reference,
            base_date,
            grace_business_days: business_day_offset,
            payment_date: self.calendar.add_business_days(base_date, business_day_offset),
        }
    }
}
