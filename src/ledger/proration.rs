use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{RentError, Result};

/// One calendar-month slice of a prorated rental period.
///
/// Rows are produced per calculation and discarded; amounts are unrounded.
/// Rounding to two decimals is a presentation concern, which means the sum of
/// rounded rows may differ from the rounded total by a minor unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    /// Month label in `MM.YYYY` form.
    pub month: String,
    /// Period within the month, clipped to the requested window.
    pub period: String,
    /// Inclusive number of charged days.
    pub days: i64,
    /// Charge for this slice at the month's daily rate.
    pub amount: f64,
}

/// Aggregate result of a proration calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSchedule {
    pub rows: Vec<ScheduleRow>,
    /// Inclusive day count over the whole window, computed independently of
    /// the per-row sum.
    pub total_days: i64,
    pub months_count: usize,
    pub total_amount: f64,
}

/// Splits a rental period into per-calendar-month charges.
///
/// Each month is charged at `monthly_rent / days-in-that-month` per day, so
/// the daily rate varies across a multi-month window and February follows the
/// leap-year calendar.
pub fn compute_schedule(
    start: NaiveDate,
    end: NaiveDate,
    monthly_rent: f64,
) -> Result<PaymentSchedule> {
    if end < start {
        return Err(RentError::InvalidRange { start, end });
    }
    if monthly_rent <= 0.0 {
        return Err(RentError::Validation(
            "Monthly rent must be greater than zero".into(),
        ));
    }

    let mut rows = Vec::new();
    let mut total_amount = 0.0;
    let mut cursor = first_of_month(start);

    while cursor <= end {
        let month_start = cursor;
        let month_end = last_of_month(cursor);

        let period_start = month_start.max(start);
        let period_end = month_end.min(end);
        let days = (period_end - period_start).num_days() + 1;

        if days > 0 {
            let daily = monthly_rent / f64::from(days_in_month(cursor));
            let amount = daily * days as f64;
            total_amount += amount;

            rows.push(ScheduleRow {
                month: month_start.format("%m.%Y").to_string(),
                period: format!(
                    "{} — {}",
                    period_start.format("%d.%m.%Y"),
                    period_end.format("%d.%m.%Y")
                ),
                days,
                amount,
            });
        }
        cursor = next_month(cursor);
    }

    let total_days = (end - start).num_days() + 1;

    Ok(PaymentSchedule {
        months_count: rows.len(),
        total_days,
        total_amount,
        rows,
    })
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), days_in_month(date)).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
