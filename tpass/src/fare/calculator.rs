use tpass_core::model::BikeCity;
use tpass_networks::network;

use super::FareQuery;

/// youbike billing tiers: (chargeable-minute cap, fee per 30-minute
/// block). partial blocks round up. the first cap is shortened by the
/// city's free allowance so the tier boundary stays at 4 hours of total
/// ride time; the last tier is uncapped.
const TIER_BLOCK_MINUTES: u32 = 30;
const TIER1_WINDOW_MINUTES: u32 = 240;
const TIER2_WINDOW_MINUTES: u32 = 240;
const TIER1_RATE: u32 = 10;
const TIER2_RATE: u32 = 20;
const TIER3_RATE: u32 = 40;

/// resolves a fare query to an amount in whole currency units.
///
/// never fails: a station name that does not resolve degrades to 0 (the
/// "unknown fare" sentinel, see [`tpass_networks::Network::fare`]), and
/// the manual-entry modes always answer 0.
pub fn compute_fare(query: &FareQuery) -> u32 {
    match query {
        FareQuery::TaipeiMetro { from, to } => network::taipei_metro().fare(from, to),
        FareQuery::NewTaipeiMetro { from, to } => network::new_taipei_metro().fare(from, to),
        FareQuery::TaoyuanMetro { from, to } => network::taoyuan_metro().fare(from, to),
        FareQuery::DanhaiLrt { from, to } => network::danhai_lrt().fare(from, to),
        FareQuery::AnkengLrt { from, to } => network::ankeng_lrt().fare(from, to),
        FareQuery::Tra { from, to } => network::tra().fare(from, to),
        FareQuery::Bus {
            segments,
            fare_per_segment,
        } => bus_fare(*segments, *fare_per_segment),
        FareQuery::YouBike { minutes, city } => youbike_fee(*minutes, *city),
        FareQuery::HighwayBus | FareQuery::Ferry => 0,
    }
}

/// bus fares scale linearly with the number of fare segments crossed.
pub fn bus_fare(segments: u32, fare_per_segment: u32) -> u32 {
    segments * fare_per_segment
}

/// youbike fee for a ride of `minutes` in `city`.
///
/// the city's free allowance is deducted first; remaining minutes are
/// billed in 30-minute blocks at escalating rates (10 within the first
/// 4 hours of ride time, 20 for the next 4, 40 beyond that). strictly
/// non-decreasing in `minutes` for a fixed city.
pub fn youbike_fee(minutes: u32, city: BikeCity) -> u32 {
    let free_minutes = city.free_minutes();
    if minutes <= free_minutes {
        return 0;
    }

    let mut remaining = minutes - free_minutes;
    let mut fee = 0;

    let tier1_minutes = remaining.min(TIER1_WINDOW_MINUTES - free_minutes);
    fee += tier1_minutes.div_ceil(TIER_BLOCK_MINUTES) * TIER1_RATE;
    remaining -= tier1_minutes;

    if remaining > 0 {
        let tier2_minutes = remaining.min(TIER2_WINDOW_MINUTES);
        fee += tier2_minutes.div_ceil(TIER_BLOCK_MINUTES) * TIER2_RATE;
        remaining -= tier2_minutes;
    }

    if remaining > 0 {
        fee += remaining.div_ceil(TIER_BLOCK_MINUTES) * TIER3_RATE;
    }

    fee
}
