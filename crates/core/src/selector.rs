//! Deterministic mapping from the current day to a dataset index.
//!
//! Day boundaries are UTC calendar days: `START_DATE` is day 1 and every
//! UTC midnight advances the day number by one. The index cycles through
//! the dataset in load order and wraps without an explicit end.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::START_DATE;

/// Position of today's verse in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelection {
    /// Index into the dataset, always in `[0, dataset_len)`.
    pub index: usize,
    /// 1-based days since the start date. Zero or negative before it.
    pub day_number: i64,
}

/// Select today's verse relative to [`START_DATE`].
///
/// Returns `None` for an empty dataset.
#[must_use]
pub fn select_daily(now: DateTime<Utc>, dataset_len: usize) -> Option<DailySelection> {
    select_daily_from(START_DATE, now, dataset_len)
}

#[must_use]
pub fn select_daily_from(
    start: NaiveDate,
    now: DateTime<Utc>,
    dataset_len: usize,
) -> Option<DailySelection> {
    let len = i64::try_from(dataset_len).ok().filter(|len| *len > 0)?;
    let day_number = day_number(start, now);
    let index = usize::try_from(cycle_index(day_number, len)).ok()?;
    Some(DailySelection { index, day_number })
}

/// 1-based day count of `now` relative to `start`, in UTC calendar days.
#[must_use]
pub fn day_number(start: NaiveDate, now: DateTime<Utc>) -> i64 {
    now.date_naive().signed_duration_since(start).num_days() + 1
}

/// Non-negative modulo of `day_number - 1` over `len`.
fn cycle_index(day_number: i64, len: i64) -> i64 {
    (day_number - 1).rem_euclid(len)
}
