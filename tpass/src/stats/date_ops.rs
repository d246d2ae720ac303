use chrono::NaiveDate;
use tpass_core::model::PERIOD_LENGTH_DAYS;

/// 1-based count of days since the period started: the creation day is
/// day 1, and the count never exceeds the fixed period length even when
/// queried long after expiry.
pub fn days_elapsed(start_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - start_date).num_days() + 1;
    days.clamp(1, PERIOD_LENGTH_DAYS as i64) as u32
}

/// days left in the period, counting today; 0 once the end date has
/// passed.
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (end_date - today).num_days() + 1;
    days.max(0) as u32
}
