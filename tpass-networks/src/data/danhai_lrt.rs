//! danhai light rail station data and fare matrix.
//! 14 stations across the green mountain (V) and blue coast (VB) lines,
//! fares 20-30.

use crate::station::Station;

pub const STATIONS: &[Station] = &[
    // green mountain line
    Station::with_transfers("V01", "紅樹林", "Hongshulin", "V", &["R"]),
    Station::new("V02", "竿蓁林", "Ganzhenlin", "V"),
    Station::new("V03", "淡金鄧公", "Danjin Denggong", "V"),
    Station::new("V04", "淡江大學", "Tamkang University", "V"),
    Station::new("V05", "淡金北新", "Danjin Beixin", "V"),
    Station::new("V06", "新市一路", "Xinshi 1st Road", "V"),
    Station::new("V07", "淡水行政中心", "Tamsui Admin Center", "V"),
    Station::new("V08", "濱海義山", "Binhai Yishan", "V"),
    Station::new("V09", "濱海沙崙", "Binhai Shalun", "V"),
    Station::new("V10", "淡海新市鎮", "Danhai New Town", "V"),
    Station::new("V11", "崁頂", "Kanding", "V"),
    // blue coast line
    Station::new("V26", "淡水漁人碼頭", "Tamsui Fisherman's Wharf", "VB"),
    Station::new("V27", "沙崙", "Shalun", "VB"),
    Station::new("V28", "台北海洋大學", "Taipei Ocean University", "VB"),
];

pub const FARE_MATRIX: &[&[u32]] = &[
    // V01 紅樹林
    &[0, 20, 20, 20, 25, 25, 25, 30, 30, 30, 30, 30, 30, 30],
    // V02 竿蓁林
    &[20, 0, 20, 20, 20, 25, 25, 25, 30, 30, 30, 30, 30, 30],
    // V03 淡金鄧公
    &[20, 20, 0, 20, 20, 20, 25, 25, 25, 30, 30, 30, 30, 30],
    // V04 淡江大學
    &[20, 20, 20, 0, 20, 20, 20, 25, 25, 25, 30, 30, 30, 30],
    // V05 淡金北新
    &[25, 20, 20, 20, 0, 20, 20, 20, 25, 25, 25, 30, 30, 30],
    // V06 新市一路
    &[25, 25, 20, 20, 20, 0, 20, 20, 20, 25, 25, 30, 30, 30],
    // V07 淡水行政中心
    &[25, 25, 25, 20, 20, 20, 0, 20, 20, 20, 25, 25, 25, 25],
    // V08 濱海義山
    &[30, 25, 25, 25, 20, 20, 20, 0, 20, 20, 20, 25, 25, 25],
    // V09 濱海沙崙
    &[30, 30, 25, 25, 25, 20, 20, 20, 0, 20, 20, 20, 20, 20],
    // V10 淡海新市鎮
    &[30, 30, 30, 25, 25, 25, 20, 20, 20, 0, 20, 25, 25, 25],
    // V11 崁頂
    &[30, 30, 30, 30, 25, 25, 25, 20, 20, 20, 0, 25, 25, 25],
    // V26 淡水漁人碼頭
    &[30, 30, 30, 30, 30, 30, 25, 25, 20, 25, 25, 0, 20, 20],
    // V27 沙崙
    &[30, 30, 30, 30, 30, 30, 25, 25, 20, 25, 25, 20, 0, 20],
    // V28 台北海洋大學
    &[30, 30, 30, 30, 30, 30, 25, 25, 20, 25, 25, 20, 20, 0],
];
