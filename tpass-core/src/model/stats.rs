use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TransportMode;

/// per-mode trip count and spend inside one period.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeTally {
    pub count: u32,
    pub amount: u32,
}

/// derived statistics for one period. never persisted: recomputed fresh
/// from the period and its trip set on every query, so there is no cached
/// state to go stale.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PeriodStats {
    pub total_amount: u32,
    pub trip_count: u32,
    /// total spend minus the pass price; negative means the flat pass was
    /// a net loss versus paying per trip.
    pub saved_amount: i64,
    pub days_elapsed: u32,
    pub days_remaining: u32,
    pub daily_average: f64,
    /// one entry per known transport mode, zero tallies included. a
    /// BTreeMap keeps repeated computations bit-identical.
    pub transport_breakdown: BTreeMap<TransportMode, ModeTally>,
}

/// whole-history totals across every period ever recorded.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalStats {
    pub total_periods: u32,
    pub total_ticket_cost: u32,
    pub total_trip_amount: u32,
    pub total_saved_amount: i64,
    pub total_trip_count: u32,
}
