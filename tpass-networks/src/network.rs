use std::collections::HashMap;
use std::sync::LazyLock;

use tpass_core::model::TransportMode;

use crate::data;
use crate::station::Station;

/// fare rule backing one network.
pub enum Pricing {
    /// exact hand-entered fare table: square, symmetric, zero diagonal,
    /// indexed by station position within the network's station list.
    Matrix(&'static [&'static [u32]]),
    /// simplified zone/distance estimate for networks without an
    /// authoritative matrix. the station index difference (plus a transfer
    /// penalty when the trip crosses lines) is mapped through a monotonic
    /// band table of (max index-count, fare) breakpoints; anything beyond
    /// the last breakpoint costs `max_fare`.
    IndexDistance {
        bands: &'static [(u32, u32)],
        max_fare: u32,
        transfer_aware: bool,
    },
}

/// one transit network: its station list, a name→index map built once
/// alongside it, and the fare rule. constructed behind process-wide
/// `LazyLock` statics and never mutated, so concurrent readers are safe.
pub struct Network {
    pub mode: TransportMode,
    pub name: &'static str,
    stations: &'static [Station],
    index_by_name: HashMap<&'static str, usize>,
    pricing: Pricing,
    /// hand-curated shortcut fares for frequent routes, keyed by a station
    /// name pair. stored in one direction, matched in both.
    common_routes: &'static [(&'static str, &'static str, u32)],
}

impl Network {
    fn new(
        mode: TransportMode,
        name: &'static str,
        stations: &'static [Station],
        pricing: Pricing,
        common_routes: &'static [(&'static str, &'static str, u32)],
    ) -> Network {
        let mut index_by_name = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            // transfer stations repeat a name across lines; the first
            // listing wins, matching lookup order in the station list
            index_by_name.entry(station.name).or_insert(idx);
        }
        Network {
            mode,
            name,
            stations,
            index_by_name,
            pricing,
            common_routes,
        }
    }

    pub fn stations(&self) -> &'static [Station] {
        self.stations
    }

    pub fn station_by_name(&self, name: &str) -> Option<&'static Station> {
        self.index_by_name.get(name).map(|idx| &self.stations[*idx])
    }

    pub fn station_by_code(&self, code: &str) -> Option<&'static Station> {
        self.stations.iter().find(|station| station.code == code)
    }

    /// substring search over local names, english names, and codes
    /// (case-insensitive for the latter two).
    pub fn search(&self, keyword: &str) -> Vec<&'static Station> {
        let lower = keyword.to_lowercase();
        self.stations
            .iter()
            .filter(|station| {
                station.name.contains(keyword)
                    || station.name_en.to_lowercase().contains(&lower)
                    || station.code.to_lowercase().contains(&lower)
            })
            .collect()
    }

    /// resolves the fare between two stations addressed by name.
    ///
    /// degrade-to-sentinel contract: if either name does not resolve in
    /// this network the result is 0, not an error. station-based trips
    /// never legitimately cost 0, so callers must read 0 as "unknown
    /// fare", never as a free ride.
    pub fn fare(&self, from: &str, to: &str) -> u32 {
        if let Some(fare) = self.common_route_fare(from, to) {
            return fare;
        }
        let (Some(&i), Some(&j)) = (self.index_by_name.get(from), self.index_by_name.get(to))
        else {
            return 0;
        };
        match &self.pricing {
            Pricing::Matrix(matrix) => matrix[i][j],
            Pricing::IndexDistance {
                bands,
                max_fare,
                transfer_aware,
            } => {
                // same-station queries settle at the network minimum, not 0
                if i == j {
                    return bands[0].1;
                }
                let a = &self.stations[i];
                let b = &self.stations[j];
                let index_count = if !transfer_aware || a.line == b.line {
                    i.abs_diff(j) as u32
                } else {
                    // 2 extra index-units per transfer; one transfer when
                    // the stations share a listed connection, else two
                    let transfers = if has_direct_transfer(a, b) { 1 } else { 2 };
                    i.abs_diff(j) as u32 + transfers * 2
                };
                band_fare(bands, *max_fare, index_count)
            }
        }
    }

    fn common_route_fare(&self, from: &str, to: &str) -> Option<u32> {
        self.common_routes.iter().find_map(|(a, b, fare)| {
            let hit = (*a == from && *b == to) || (*a == to && *b == from);
            hit.then_some(*fare)
        })
    }
}

fn band_fare(bands: &[(u32, u32)], max_fare: u32, index_count: u32) -> u32 {
    for (max_count, fare) in bands {
        if index_count <= *max_count {
            return *fare;
        }
    }
    max_fare
}

fn has_direct_transfer(a: &Station, b: &Station) -> bool {
    if a.transfer_lines.is_empty() || b.transfer_lines.is_empty() {
        return false;
    }
    a.transfer_lines
        .iter()
        .any(|line| *line == b.line || b.transfer_lines.contains(line))
}

static TAIPEI_METRO: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::TaipeiMetro,
        "台北捷運",
        data::taipei_metro::STATIONS,
        Pricing::IndexDistance {
            bands: data::taipei_metro::FARE_BANDS,
            max_fare: data::taipei_metro::MAX_FARE,
            transfer_aware: true,
        },
        data::taipei_metro::COMMON_ROUTES,
    )
});

static NEW_TAIPEI_METRO: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::NewTaipeiMetro,
        "新北捷運環狀線",
        data::new_taipei_metro::STATIONS,
        Pricing::Matrix(data::new_taipei_metro::FARE_MATRIX),
        &[],
    )
});

static TAOYUAN_METRO: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::TaoyuanMetro,
        "桃園機場捷運",
        data::taoyuan_metro::STATIONS,
        Pricing::IndexDistance {
            bands: data::taoyuan_metro::FARE_BANDS,
            max_fare: data::taoyuan_metro::MAX_FARE,
            transfer_aware: false,
        },
        &[],
    )
});

static DANHAI_LRT: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::DanhaiLrt,
        "淡海輕軌",
        data::danhai_lrt::STATIONS,
        Pricing::Matrix(data::danhai_lrt::FARE_MATRIX),
        &[],
    )
});

static ANKENG_LRT: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::AnkengLrt,
        "安坑輕軌",
        data::ankeng_lrt::STATIONS,
        Pricing::Matrix(data::ankeng_lrt::FARE_MATRIX),
        &[],
    )
});

static TRA: LazyLock<Network> = LazyLock::new(|| {
    Network::new(
        TransportMode::Tra,
        "台鐵基隆-中壢區間",
        data::tra::STATIONS,
        Pricing::Matrix(data::tra::FARE_MATRIX),
        &[],
    )
});

pub fn taipei_metro() -> &'static Network {
    &TAIPEI_METRO
}

pub fn new_taipei_metro() -> &'static Network {
    &NEW_TAIPEI_METRO
}

pub fn taoyuan_metro() -> &'static Network {
    &TAOYUAN_METRO
}

pub fn danhai_lrt() -> &'static Network {
    &DANHAI_LRT
}

pub fn ankeng_lrt() -> &'static Network {
    &ANKENG_LRT
}

pub fn tra() -> &'static Network {
    &TRA
}

/// the network serving a station-based transport mode, `None` for modes
/// with no station network (bus, youbike, ferry...).
pub fn for_mode(mode: TransportMode) -> Option<&'static Network> {
    match mode {
        TransportMode::TaipeiMetro => Some(taipei_metro()),
        TransportMode::NewTaipeiMetro => Some(new_taipei_metro()),
        TransportMode::TaoyuanMetro => Some(taoyuan_metro()),
        TransportMode::DanhaiLrt => Some(danhai_lrt()),
        TransportMode::AnkengLrt => Some(ankeng_lrt()),
        TransportMode::Tra => Some(tra()),
        TransportMode::Bus
        | TransportMode::HighwayBus
        | TransportMode::YouBike
        | TransportMode::Ferry => None,
    }
}

pub fn all_networks() -> [&'static Network; 6] {
    [
        taipei_metro(),
        new_taipei_metro(),
        taoyuan_metro(),
        danhai_lrt(),
        ankeng_lrt(),
        tra(),
    ]
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;

    #[test]
    fn test_matrix_networks_are_symmetric_with_zero_diagonal() {
        for network in all_networks() {
            let Pricing::Matrix(matrix) = &network.pricing else {
                continue;
            };
            let n = network.stations().len();
            assert_eq!(matrix.len(), n, "{}: matrix is not square", network.name);
            for (i, j) in iproduct!(0..n, 0..n) {
                assert_eq!(
                    matrix[i].len(),
                    n,
                    "{}: row {} has the wrong width",
                    network.name,
                    i
                );
                assert_eq!(
                    matrix[i][j], matrix[j][i],
                    "{}: fare asymmetry between {} and {}",
                    network.name, network.stations()[i].code, network.stations()[j].code
                );
            }
            for i in 0..n {
                assert_eq!(
                    matrix[i][i], 0,
                    "{}: nonzero self-fare at {}",
                    network.name,
                    network.stations()[i].code
                );
            }
        }
    }

    #[test]
    fn test_matrix_fare_symmetry_through_lookup() {
        for network in [new_taipei_metro(), danhai_lrt(), ankeng_lrt(), tra()] {
            for (a, b) in iproduct!(network.stations(), network.stations()) {
                assert_eq!(
                    network.fare(a.name, b.name),
                    network.fare(b.name, a.name),
                    "{}: {} -> {} not symmetric",
                    network.name,
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_station_degrades_to_zero_everywhere() {
        for network in all_networks() {
            assert_eq!(
                network.fare("NoSuchStation", "AlsoMissing"),
                0,
                "{}: unknown pair must degrade to 0",
                network.name
            );
            let known = network.stations()[0].name;
            assert_eq!(network.fare(known, "AlsoMissing"), 0);
            assert_eq!(network.fare("NoSuchStation", known), 0);
        }
    }

    #[test]
    fn test_index_distance_self_fare_is_network_minimum() {
        // intentional divergence from the matrix networks' zero diagonal
        assert_eq!(taipei_metro().fare("動物園", "動物園"), 20);
        assert_eq!(taoyuan_metro().fare("林口", "林口"), 30);
    }

    #[test]
    fn test_known_pairs_never_cost_zero() {
        for network in all_networks() {
            for (a, b) in iproduct!(network.stations(), network.stations()) {
                if network.station_by_name(a.name).map(|s| s.code)
                    == network.station_by_name(b.name).map(|s| s.code)
                {
                    continue;
                }
                assert!(
                    network.fare(a.name, b.name) > 0,
                    "{}: resolvable pair {} -> {} returned the unknown sentinel",
                    network.name,
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_common_route_shortcut_hits_both_directions() {
        let network = taipei_metro();
        assert_eq!(network.fare("台北車站", "淡水"), 50);
        assert_eq!(network.fare("淡水", "台北車站"), 50);
        assert_eq!(network.fare("台北車站", "動物園"), 35);
    }

    #[test]
    fn test_taipei_same_line_uses_plain_index_distance() {
        let network = taipei_metro();
        // BR02 木柵 -> BR04 萬芳醫院: two stops apart on the same line
        assert_eq!(network.fare("木柵", "萬芳醫院"), 20);
        // BR02 -> BR08 科技大樓: six stops
        assert_eq!(network.fare("木柵", "科技大樓"), 30);
    }

    #[test]
    fn test_taipei_cross_line_adds_transfer_penalty() {
        let network = taipei_metro();
        // 動物園 (BR01, index 0) -> 象山 (R29, index 51): no direct
        // transfer listed on either, so 2 transfers: 51 + 4 = 55 -> max band
        assert_eq!(network.fare("動物園", "象山"), 65);
    }

    #[test]
    fn test_station_lookup_by_name_and_code() {
        let network = tra();
        let taipei = network
            .station_by_name("台北")
            .expect("test invariant failed: 台北 should exist");
        assert_eq!(taipei.code, "TRA11");
        let by_code = network
            .station_by_code("TRA21")
            .expect("test invariant failed: TRA21 should exist");
        assert_eq!(by_code.name, "中壢");
        assert!(network.station_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_transfer_names_resolve_to_first_listing() {
        // 台北車站 appears on both R and BL; the R listing comes first
        let station = taipei_metro()
            .station_by_name("台北車站")
            .expect("test invariant failed: 台北車站 should exist");
        assert_eq!(station.code, "R21");
    }

    #[test]
    fn test_search_matches_name_english_and_code() {
        let network = taipei_metro();
        assert!(!network.search("淡水").is_empty());
        let by_en = network.search("taipei zoo");
        assert_eq!(by_en.len(), 1);
        assert_eq!(by_en[0].code, "BR01");
        assert!(network.search("br0").len() >= 9);
    }

    #[test]
    fn test_for_mode_covers_exactly_the_rail_modes() {
        use tpass_core::model::TransportMode;
        for mode in TransportMode::ALL {
            assert_eq!(
                for_mode(mode).is_some(),
                mode.is_station_based(),
                "network coverage mismatch for {:?}",
                mode
            );
        }
    }
}
