//! Calendar ranges relative to a reference date.
//!
//! ## Summary
//! Every `*_of` method returns a `(first, second)` pair of dates; the
//! matching `dates_in_*_of` method turns that pair into a half-open
//! [`DaySpan`] `[first, second)`.
//!
//! - week and fortnight pairs are already half-open (`second` is the first
//!   day of the next period),
//! - weekend, month and year pairs are inclusive, so their day spans stop
//!   one day short of `second`.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use eventide_core::config::WeekConfig;
use eventide_core::error::{CoreError, CoreResult};

use crate::days::DaySpan;

/// Pure calendar arithmetic parameterized by the configured week layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeRangeCalculator {
    config: WeekConfig,
}

impl RelativeRangeCalculator {
    #[must_use]
    pub const fn new(config: WeekConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> WeekConfig {
        self.config
    }

    /// ## Summary
    /// `[w1, w1 + 7)` where `w1` is the first day of the week on or before `d`.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] near the calendar limits.
    pub fn week_of(&self, d: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
        self.week_start_plus(d, 7)
    }

    /// ## Summary
    /// `[we1, we2]`: the next first-day-of-weekend on or after `d`, then the
    /// next last-day-of-weekend on or after that.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] near the calendar limits.
    pub fn weekend_of(&self, d: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
        let first = on_or_after(d, self.config.first_day_of_weekend)?;
        let last = on_or_after(first, self.config.last_day_of_weekend)?;
        tracing::trace!(%d, %first, %last, "Weekend resolved");
        Ok((first, last))
    }

    /// ## Summary
    /// `[w1, w1 + 14)` with the same `w1` as [`Self::week_of`].
    ///
    /// Fortnights of adjacent weeks overlap.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] near the calendar limits.
    pub fn fortnight_of(&self, d: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
        self.week_start_plus(d, 14)
    }

    /// ## Summary
    /// First and last day of `d`'s month.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] near the calendar limits.
    pub fn month_of(&self, d: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
        let first = d.with_day(1).ok_or_else(|| out_of_range(d))?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| out_of_range(d))?;
        Ok((first, last))
    }

    /// ## Summary
    /// January 1st and December 31st of `d`'s year.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the year has no representable
    /// December 31st.
    pub fn year_of(&self, d: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(d.year(), 1, 1).ok_or_else(|| out_of_range(d))?;
        let last = NaiveDate::from_ymd_opt(d.year(), 12, 31).ok_or_else(|| out_of_range(d))?;
        Ok((first, last))
    }

    /// ## Errors
    /// See [`Self::week_of`].
    pub fn dates_in_week_of(&self, d: NaiveDate) -> CoreResult<DaySpan> {
        self.week_of(d).map(span)
    }

    /// ## Errors
    /// See [`Self::weekend_of`].
    pub fn dates_in_weekend_of(&self, d: NaiveDate) -> CoreResult<DaySpan> {
        self.weekend_of(d).map(span)
    }

    /// ## Errors
    /// See [`Self::fortnight_of`].
    pub fn dates_in_fortnight_of(&self, d: NaiveDate) -> CoreResult<DaySpan> {
        self.fortnight_of(d).map(span)
    }

    /// ## Errors
    /// See [`Self::month_of`].
    pub fn dates_in_month_of(&self, d: NaiveDate) -> CoreResult<DaySpan> {
        self.month_of(d).map(span)
    }

    /// ## Errors
    /// See [`Self::year_of`].
    pub fn dates_in_year_of(&self, d: NaiveDate) -> CoreResult<DaySpan> {
        self.year_of(d).map(span)
    }

    /// ## Summary
    /// True if `day` falls between the first and last day of the weekend.
    ///
    /// Weekdays are numbered from Monday = 0. When the first day of the
    /// weekend is numbered after the last (e.g. Friday to Monday) the range
    /// wraps through Sunday.
    #[must_use]
    pub fn is_weekend(&self, day: Weekday) -> bool {
        let first = self.config.first_day_of_weekend.num_days_from_monday();
        let last = self.config.last_day_of_weekend.num_days_from_monday();
        let day = day.num_days_from_monday();

        if first <= last {
            first <= day && day <= last
        } else {
            day >= first || day <= last
        }
    }

    #[must_use]
    pub fn is_weekday(&self, day: Weekday) -> bool {
        !self.is_weekend(day)
    }

    #[must_use]
    pub fn is_weekend_date(&self, d: &impl Datelike) -> bool {
        self.is_weekend(d.weekday())
    }

    #[must_use]
    pub fn is_weekday_date(&self, d: &impl Datelike) -> bool {
        self.is_weekday(d.weekday())
    }

    fn week_start_plus(&self, d: NaiveDate, days: u64) -> CoreResult<(NaiveDate, NaiveDate)> {
        let first = on_or_before(d, self.config.first_day_of_week)?;
        let end = first
            .checked_add_days(Days::new(days))
            .ok_or_else(|| out_of_range(d))?;
        Ok((first, end))
    }
}

/// Most recent `weekday` on or before `d`.
fn on_or_before(d: NaiveDate, weekday: Weekday) -> CoreResult<NaiveDate> {
    let back = (d.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    d.checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| out_of_range(d))
}

/// Next `weekday` on or after `d`.
fn on_or_after(d: NaiveDate, weekday: Weekday) -> CoreResult<NaiveDate> {
    let ahead = (weekday.num_days_from_monday() + 7 - d.weekday().num_days_from_monday()) % 7;
    d.checked_add_days(Days::new(u64::from(ahead)))
        .ok_or_else(|| out_of_range(d))
}

fn span((first, second): (NaiveDate, NaiveDate)) -> DaySpan {
    DaySpan::new(first, second)
}

fn out_of_range(d: NaiveDate) -> CoreError {
    CoreError::OutOfRange(format!("relative range around {d}"))
}
