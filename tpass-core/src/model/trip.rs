use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{BikeCity, TransportMode};

/// one recorded instance of paid transit use, attributed to a period.
///
/// `amount` is produced by the fare calculator (or overridden by hand)
/// when the trip is created or edited; it is never recomputed after the
/// fact. which optional fields are populated depends on the mode: station
/// pairs for the rail modes, `route_number`/`segments` for buses,
/// `duration_minutes`/`city` for youbike, `ferry_route` for ferries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: String,
    pub period_id: String,
    pub mode: TransportMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<BikeCity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferry_route: Option<String>,
    /// fare in whole currency units. station-based modes never
    /// legitimately cost 0, so callers must treat 0 as "unresolved".
    pub amount: u32,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
