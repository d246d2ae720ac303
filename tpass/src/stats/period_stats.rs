use std::collections::BTreeMap;

use chrono::NaiveDate;
use tpass_core::model::{
    ModeTally, Period, PeriodStats, TransportMode, Trip, DEFAULT_TICKET_PRICE,
};

use crate::store::{StoreError, TripStore};

use super::{days_elapsed, days_remaining};

const REFUND_PER_DAY: u32 = 300;
const REFUND_HANDLING_FEE: u32 = 20;

/// aggregates a period's trips into a statistics snapshot.
///
/// a pure read-side projection: recomputed from the full trip set on
/// every call, deterministic and idempotent, inputs untouched. `trips`
/// must be the trips whose `period_id` matches `period` — attribution is
/// the caller's contract, not checked here.
pub fn compute_period_stats(period: &Period, trips: &[Trip], today: NaiveDate) -> PeriodStats {
    let total_amount: u32 = trips.iter().map(|trip| trip.amount).sum();
    let trip_count = trips.len() as u32;
    let days_elapsed = days_elapsed(period.start_date, today);
    let days_remaining = days_remaining(period.end_date, today);
    // days_elapsed is never 0 by construction, but don't trust callers of
    // the standalone helpers to uphold that
    let daily_average = if days_elapsed > 0 {
        f64::from(total_amount) / f64::from(days_elapsed)
    } else {
        0.0
    };

    let mut transport_breakdown: BTreeMap<TransportMode, ModeTally> = TransportMode::ALL
        .iter()
        .map(|mode| (*mode, ModeTally::default()))
        .collect();
    for trip in trips {
        let tally = transport_breakdown.entry(trip.mode).or_default();
        tally.count += 1;
        tally.amount += trip.amount;
    }

    PeriodStats {
        total_amount,
        trip_count,
        saved_amount: saved_amount(total_amount, period.ticket_price),
        days_elapsed,
        days_remaining,
        daily_average,
        transport_breakdown,
    }
}

/// fetches a period's trips from the store and aggregates them.
pub fn stats_for_period<S: TripStore>(
    store: &S,
    period: &Period,
    today: NaiveDate,
) -> Result<PeriodStats, StoreError> {
    let trips = store.trips_for_period(&period.id)?;
    Ok(compute_period_stats(period, &trips, today))
}

/// total spend minus the pass price; negative when the pass was a net
/// loss versus paying per trip.
pub fn saved_amount(total_amount: u32, ticket_price: u32) -> i64 {
    i64::from(total_amount) - i64::from(ticket_price)
}

/// how much more per-trip spend is needed before the pass pays for
/// itself; 0 once break-even is reached.
pub fn amount_to_break_even(current_amount: u32, ticket_price: u32) -> u32 {
    ticket_price.saturating_sub(current_amount)
}

/// early-termination refund estimate for the default pass: the price
/// less 300 per elapsed day and a 20-unit handling fee. negative once
/// the deductions exceed the price, meaning no refund is available.
pub fn refund_amount(days_elapsed: u32) -> i64 {
    i64::from(DEFAULT_TICKET_PRICE)
        - i64::from(days_elapsed) * i64::from(REFUND_PER_DAY)
        - i64::from(REFUND_HANDLING_FEE)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use tpass_core::model::{BikeCity, PeriodStatus};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: valid date")
    }

    fn noon(day: NaiveDate) -> NaiveDateTime {
        day.and_hms_opt(12, 0, 0)
            .expect("test invariant failed: valid time")
    }

    fn period(start: NaiveDate, ticket_price: u32) -> Period {
        Period {
            id: "p1".to_string(),
            start_date: start,
            end_date: Period::end_date_for(start),
            ticket_price,
            status: PeriodStatus::Active,
            created_at: noon(start),
            updated_at: noon(start),
        }
    }

    fn trip(id: &str, mode: TransportMode, amount: u32, day: NaiveDate) -> Trip {
        Trip {
            id: id.to_string(),
            period_id: "p1".to_string(),
            mode,
            departure_station: None,
            arrival_station: None,
            route_number: None,
            segments: None,
            duration_minutes: None,
            city: None,
            ferry_route: None,
            amount,
            timestamp: noon(day),
            note: None,
            created_at: noon(day),
            updated_at: noon(day),
        }
    }

    #[test]
    fn test_stats_totals_and_savings() {
        let start = date(2024, 5, 1);
        let p = period(start, 1200);
        let trips = vec![
            trip("t1", TransportMode::TaipeiMetro, 25, start),
            trip("t2", TransportMode::Bus, 45, start),
            trip("t3", TransportMode::Tra, 58, date(2024, 5, 3)),
        ];
        let stats = compute_period_stats(&p, &trips, date(2024, 5, 4));
        assert_eq!(stats.total_amount, 128);
        assert_eq!(stats.trip_count, 3);
        assert_eq!(stats.saved_amount, 128 - 1200);
        assert_eq!(stats.days_elapsed, 4);
        assert_eq!(stats.days_remaining, 27);
        assert!((stats.daily_average - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_recomputation_is_bit_identical() {
        let start = date(2024, 5, 1);
        let p = period(start, 1200);
        let trips = vec![
            trip("t1", TransportMode::YouBike, 0, start),
            trip("t2", TransportMode::TaipeiMetro, 65, start),
            trip("t3", TransportMode::TaipeiMetro, 20, date(2024, 5, 2)),
        ];
        let today = date(2024, 5, 10);
        let first = compute_period_stats(&p, &trips, today);
        let second = compute_period_stats(&p, &trips, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_reconciles_with_totals() {
        let start = date(2024, 5, 1);
        let p = period(start, 1200);
        let mut trips = Vec::new();
        for (i, mode) in [
            TransportMode::TaipeiMetro,
            TransportMode::TaipeiMetro,
            TransportMode::Bus,
            TransportMode::YouBike,
            TransportMode::Ferry,
        ]
        .into_iter()
        .enumerate()
        {
            trips.push(trip(&format!("t{}", i), mode, 10 * (i as u32 + 1), start));
        }
        let stats = compute_period_stats(&p, &trips, start);
        let count_sum: u32 = stats.transport_breakdown.values().map(|t| t.count).sum();
        let amount_sum: u32 = stats.transport_breakdown.values().map(|t| t.amount).sum();
        assert_eq!(count_sum, stats.trip_count);
        assert_eq!(amount_sum, stats.total_amount);
        assert_eq!(
            stats.transport_breakdown[&TransportMode::TaipeiMetro],
            ModeTally {
                count: 2,
                amount: 30
            }
        );
    }

    #[test]
    fn test_breakdown_lists_every_mode_even_when_unused() {
        let p = period(date(2024, 5, 1), 1200);
        let trips = vec![trip("t1", TransportMode::Bus, 15, date(2024, 5, 1))];
        let stats = compute_period_stats(&p, &trips, date(2024, 5, 1));
        assert_eq!(stats.transport_breakdown.len(), TransportMode::ALL.len());
        for mode in TransportMode::ALL {
            assert!(
                stats.transport_breakdown.contains_key(&mode),
                "missing mode {:?}",
                mode
            );
        }
        assert_eq!(
            stats.transport_breakdown[&TransportMode::Ferry],
            ModeTally::default()
        );
    }

    #[test]
    fn test_empty_trip_set() {
        let p = period(date(2024, 5, 1), 1200);
        let stats = compute_period_stats(&p, &[], date(2024, 5, 1));
        assert_eq!(stats.total_amount, 0);
        assert_eq!(stats.trip_count, 0);
        assert_eq!(stats.saved_amount, -1200);
        assert_eq!(stats.daily_average, 0.0);
    }

    #[test]
    fn test_free_youbike_trips_count_but_add_nothing() {
        let start = date(2024, 5, 1);
        let p = period(start, 1200);
        let mut t = trip("t1", TransportMode::YouBike, 0, start);
        t.duration_minutes = Some(25);
        t.city = Some(BikeCity::Taipei);
        let stats = compute_period_stats(&p, &[t], start);
        assert_eq!(stats.trip_count, 1);
        assert_eq!(stats.total_amount, 0);
        assert_eq!(
            stats.transport_breakdown[&TransportMode::YouBike],
            ModeTally {
                count: 1,
                amount: 0
            }
        );
    }

    #[test]
    fn test_stats_for_period_reads_only_the_matching_trips() {
        use crate::store::MemoryStore;

        let start = date(2024, 5, 1);
        let p = period(start, 1200);
        let mut store = MemoryStore::new();
        store.insert_trip(trip("t1", TransportMode::Bus, 45, start));
        store.insert_trip(trip("t2", TransportMode::TaipeiMetro, 25, start));
        let mut other = trip("t3", TransportMode::Tra, 97, start);
        other.period_id = "p2".to_string();
        store.insert_trip(other);

        let stats = stats_for_period(&store, &p, start)
            .expect("test invariant failed: store read should succeed");
        assert_eq!(stats.trip_count, 2);
        assert_eq!(stats.total_amount, 70);
    }

    #[test]
    fn test_break_even_helper() {
        assert_eq!(amount_to_break_even(0, 1200), 1200);
        assert_eq!(amount_to_break_even(700, 1200), 500);
        assert_eq!(amount_to_break_even(1200, 1200), 0);
        assert_eq!(amount_to_break_even(1500, 1200), 0);
    }

    #[test]
    fn test_saved_amount_sign() {
        assert_eq!(saved_amount(1500, 1200), 300);
        assert_eq!(saved_amount(900, 1200), -300);
    }

    #[test]
    fn test_refund_amount_schedule() {
        assert_eq!(refund_amount(1), 1200 - 300 - 20);
        assert_eq!(refund_amount(3), 1200 - 900 - 20);
        // deductions overtake the price: no refund left
        assert!(refund_amount(4) < 0);
    }
}
