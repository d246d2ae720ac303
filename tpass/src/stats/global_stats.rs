use tpass_core::model::{GlobalStats, Period, Trip};

/// whole-history totals across every period and trip ever recorded.
/// like the per-period snapshot this is recomputed on demand, never
/// stored.
pub fn compute_global_stats(periods: &[Period], trips: &[Trip]) -> GlobalStats {
    let total_ticket_cost: u32 = periods.iter().map(|period| period.ticket_price).sum();
    let total_trip_amount: u32 = trips.iter().map(|trip| trip.amount).sum();
    GlobalStats {
        total_periods: periods.len() as u32,
        total_ticket_cost,
        total_trip_amount,
        total_saved_amount: i64::from(total_trip_amount) - i64::from(total_ticket_cost),
        total_trip_count: trips.len() as u32,
    }
}
