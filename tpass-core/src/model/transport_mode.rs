use serde::{Deserialize, Serialize};

/// the ten transit modes a trip can be recorded against. the six rail
/// modes resolve fares from a station pair; bus fares scale with segment
/// count, youbike fees with ride duration, and highway bus / ferry fares
/// are always entered by hand.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    TaipeiMetro,
    NewTaipeiMetro,
    TaoyuanMetro,
    DanhaiLrt,
    AnkengLrt,
    Tra,
    Bus,
    HighwayBus,
    #[serde(rename = "youbike")]
    YouBike,
    Ferry,
}

impl TransportMode {
    /// every supported mode. the period statistics breakdown iterates this
    /// so modes with no recorded trips still appear with zero tallies.
    pub const ALL: [TransportMode; 10] = [
        TransportMode::TaipeiMetro,
        TransportMode::NewTaipeiMetro,
        TransportMode::TaoyuanMetro,
        TransportMode::DanhaiLrt,
        TransportMode::AnkengLrt,
        TransportMode::Tra,
        TransportMode::Bus,
        TransportMode::HighwayBus,
        TransportMode::YouBike,
        TransportMode::Ferry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::TaipeiMetro => "台北捷運",
            TransportMode::NewTaipeiMetro => "新北捷運",
            TransportMode::TaoyuanMetro => "桃園機捷",
            TransportMode::DanhaiLrt => "淡海輕軌",
            TransportMode::AnkengLrt => "安坑輕軌",
            TransportMode::Tra => "台鐵",
            TransportMode::Bus => "公車",
            TransportMode::HighwayBus => "客運",
            TransportMode::YouBike => "YouBike",
            TransportMode::Ferry => "渡輪",
        }
    }

    /// true for modes whose fare is resolved from a departure/arrival
    /// station pair.
    pub fn is_station_based(&self) -> bool {
        matches!(
            self,
            TransportMode::TaipeiMetro
                | TransportMode::NewTaipeiMetro
                | TransportMode::TaoyuanMetro
                | TransportMode::DanhaiLrt
                | TransportMode::AnkengLrt
                | TransportMode::Tra
        )
    }
}
