//! ankeng light rail station data and fare matrix.
//! 9 stations on the K line, fares 20-30.

use crate::station::Station;

pub const STATIONS: &[Station] = &[
    Station::with_transfers("K01", "十四張", "Shisizhang", "K", &["Y"]),
    Station::new("K02", "陽光運動公園", "Sunshine Sports Park", "K"),
    Station::new("K03", "新和國小", "Xinhe Elementary School", "K"),
    Station::new("K04", "安康", "Ankang", "K"),
    Station::new("K05", "景文科大", "Jinwen University", "K"),
    Station::new("K06", "耕莘安康院區", "Cardinal Tien Ankang", "K"),
    Station::new("K07", "安坑國小", "Ankeng Elementary School", "K"),
    Station::new("K08", "雙城", "Shuangcheng", "K"),
    Station::new("K09", "玫瑰中國城", "Rose Chinatown", "K"),
];

pub const FARE_MATRIX: &[&[u32]] = &[
    // K01 十四張
    &[0, 20, 20, 20, 25, 25, 25, 30, 30],
    // K02 陽光運動公園
    &[20, 0, 20, 20, 20, 25, 25, 25, 30],
    // K03 新和國小
    &[20, 20, 0, 20, 20, 20, 25, 25, 25],
    // K04 安康
    &[20, 20, 20, 0, 20, 20, 20, 25, 25],
    // K05 景文科大
    &[25, 20, 20, 20, 0, 20, 20, 20, 25],
    // K06 耕莘安康院區
    &[25, 25, 20, 20, 20, 0, 20, 20, 20],
    // K07 安坑國小
    &[25, 25, 25, 20, 20, 20, 0, 20, 20],
    // K08 雙城
    &[30, 25, 25, 25, 20, 20, 20, 0, 20],
    // K09 玫瑰中國城
    &[30, 30, 25, 25, 25, 20, 20, 20, 0],
];
