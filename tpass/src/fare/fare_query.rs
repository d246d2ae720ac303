use tpass_core::model::{BikeCity, TransportMode};

/// a fare computation request: one variant per transport mode, each
/// carrying the parameters its fare rule needs. resolved through a single
/// exhaustive match in [`super::compute_fare`], so supporting a new
/// network is a compile-time-checked variant addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FareQuery<'a> {
    TaipeiMetro { from: &'a str, to: &'a str },
    NewTaipeiMetro { from: &'a str, to: &'a str },
    TaoyuanMetro { from: &'a str, to: &'a str },
    DanhaiLrt { from: &'a str, to: &'a str },
    AnkengLrt { from: &'a str, to: &'a str },
    Tra { from: &'a str, to: &'a str },
    Bus { segments: u32, fare_per_segment: u32 },
    /// highway bus fares vary by operator and are always entered by hand.
    HighwayBus,
    YouBike { minutes: u32, city: BikeCity },
    /// ferry fares are route-specific and always entered by hand.
    Ferry,
}

impl<'a> FareQuery<'a> {
    /// the station-pair query for a station-based mode, `None` for modes
    /// not addressed by a departure/arrival pair.
    pub fn for_stations(
        mode: TransportMode,
        from: &'a str,
        to: &'a str,
    ) -> Option<FareQuery<'a>> {
        match mode {
            TransportMode::TaipeiMetro => Some(FareQuery::TaipeiMetro { from, to }),
            TransportMode::NewTaipeiMetro => Some(FareQuery::NewTaipeiMetro { from, to }),
            TransportMode::TaoyuanMetro => Some(FareQuery::TaoyuanMetro { from, to }),
            TransportMode::DanhaiLrt => Some(FareQuery::DanhaiLrt { from, to }),
            TransportMode::AnkengLrt => Some(FareQuery::AnkengLrt { from, to }),
            TransportMode::Tra => Some(FareQuery::Tra { from, to }),
            TransportMode::Bus
            | TransportMode::HighwayBus
            | TransportMode::YouBike
            | TransportMode::Ferry => None,
        }
    }

    pub fn mode(&self) -> TransportMode {
        match self {
            FareQuery::TaipeiMetro { .. } => TransportMode::TaipeiMetro,
            FareQuery::NewTaipeiMetro { .. } => TransportMode::NewTaipeiMetro,
            FareQuery::TaoyuanMetro { .. } => TransportMode::TaoyuanMetro,
            FareQuery::DanhaiLrt { .. } => TransportMode::DanhaiLrt,
            FareQuery::AnkengLrt { .. } => TransportMode::AnkengLrt,
            FareQuery::Tra { .. } => TransportMode::Tra,
            FareQuery::Bus { .. } => TransportMode::Bus,
            FareQuery::HighwayBus => TransportMode::HighwayBus,
            FareQuery::YouBike { .. } => TransportMode::YouBike,
            FareQuery::Ferry => TransportMode::Ferry,
        }
    }
}
