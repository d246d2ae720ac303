use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// length of a subscription period, inclusive of the start day.
pub const PERIOD_LENGTH_DAYS: u32 = 30;

/// default flat-rate pass price in whole currency units.
pub const DEFAULT_TICKET_PRICE: u32 = 1200;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    Active,
    Completed,
}

/// a fixed 30-day window during which a flat-rate transit pass is valid.
///
/// `end_date` is fixed at creation (`start_date` + 29 days) and never
/// moves. the only mutation a period ever sees is the one-way status
/// transition from `Active` to `Completed`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Period {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub ticket_price: u32,
    pub status: PeriodStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Period {
    /// builds a new active period covering `start_date` through
    /// `start_date` + 29 days.
    pub fn new(id: String, start_date: NaiveDate, ticket_price: u32, now: NaiveDateTime) -> Period {
        Period {
            id,
            start_date,
            end_date: Period::end_date_for(start_date),
            ticket_price,
            status: PeriodStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// last day the pass is valid: 29 days after the start, making a
    /// 30-day inclusive window.
    pub fn end_date_for(start_date: NaiveDate) -> NaiveDate {
        start_date + Duration::days(29)
    }

    /// date-only check; the period is ended strictly the day *after*
    /// `end_date`, so a period ending today is still running.
    pub fn is_ended(&self, today: NaiveDate) -> bool {
        today > self.end_date
    }

    pub fn is_active(&self) -> bool {
        self.status == PeriodStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: valid date")
    }

    #[test]
    fn test_end_date_is_29_days_after_start() {
        assert_eq!(Period::end_date_for(date(2024, 1, 1)), date(2024, 1, 30));
        // crosses a month boundary
        assert_eq!(Period::end_date_for(date(2024, 2, 15)), date(2024, 3, 15));
    }

    #[test]
    fn test_period_ends_strictly_after_end_date() {
        let now = date(2024, 1, 1).and_hms_opt(8, 0, 0).unwrap();
        let period = Period::new("p1".to_string(), date(2024, 1, 1), 1200, now);
        assert!(!period.is_ended(date(2024, 1, 30)), "last day still runs");
        assert!(period.is_ended(date(2024, 1, 31)));
    }
}
