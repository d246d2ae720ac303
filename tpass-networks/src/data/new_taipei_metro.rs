//! new taipei metro circular line station data and fare matrix.
//! 15 stations (Y06-Y20), fares 20-55.

use crate::station::Station;

pub const STATIONS: &[Station] = &[
    Station::with_transfers("Y06", "大坪林", "Dapinglin", "Y", &["G"]),
    Station::with_transfers("Y07", "新北產業園區", "New Taipei Industrial Park", "Y", &["A"]),
    Station::new("Y08", "幸福", "Xingfu", "Y"),
    Station::with_transfers("Y09", "頭前庄", "Touqianzhuang", "Y", &["O"]),
    Station::with_transfers("Y10", "新埔民生", "Xinpu Minsheng", "Y", &["BL"]),
    Station::with_transfers("Y11", "板橋", "Banqiao", "Y", &["BL"]),
    Station::new("Y12", "板新", "Banxin", "Y"),
    Station::new("Y13", "中和", "Zhonghe", "Y"),
    Station::new("Y14", "橋和", "Qiaohe", "Y"),
    Station::new("Y15", "中原", "Zhongyuan", "Y"),
    Station::new("Y16", "板南", "Bannan", "Y"),
    Station::with_transfers("Y17", "景安", "Jingan", "Y", &["O"]),
    Station::new("Y18", "景平", "Jingping", "Y"),
    Station::new("Y19", "秀朗橋", "Xiulanqiao", "Y"),
    Station::with_transfers("Y20", "十四張", "Shisizhang", "Y", &["K"]),
];

pub const FARE_MATRIX: &[&[u32]] = &[
    // Y06 大坪林
    &[0, 20, 20, 25, 30, 30, 35, 35, 40, 40, 45, 45, 50, 50, 55],
    // Y07 新北產業園區
    &[20, 0, 20, 20, 25, 25, 30, 30, 35, 35, 40, 40, 45, 45, 50],
    // Y08 幸福
    &[20, 20, 0, 20, 20, 25, 25, 30, 30, 35, 35, 40, 40, 45, 45],
    // Y09 頭前庄
    &[25, 20, 20, 0, 20, 20, 25, 25, 30, 30, 35, 35, 40, 40, 45],
    // Y10 新埔民生
    &[30, 25, 20, 20, 0, 20, 20, 25, 25, 30, 30, 35, 35, 40, 40],
    // Y11 板橋
    &[30, 25, 25, 20, 20, 0, 20, 20, 25, 25, 30, 30, 35, 35, 40],
    // Y12 板新
    &[35, 30, 25, 25, 20, 20, 0, 20, 20, 25, 25, 30, 30, 35, 35],
    // Y13 中和
    &[35, 30, 30, 25, 25, 20, 20, 0, 20, 20, 25, 25, 30, 30, 35],
    // Y14 橋和
    &[40, 35, 30, 30, 25, 25, 20, 20, 0, 20, 20, 25, 25, 30, 30],
    // Y15 中原
    &[40, 35, 35, 30, 30, 25, 25, 20, 20, 0, 20, 20, 25, 25, 30],
    // Y16 板南
    &[45, 40, 35, 35, 30, 30, 25, 25, 20, 20, 0, 20, 20, 25, 25],
    // Y17 景安
    &[45, 40, 40, 35, 35, 30, 30, 25, 25, 20, 20, 0, 20, 20, 25],
    // Y18 景平
    &[50, 45, 40, 40, 35, 35, 30, 30, 25, 25, 20, 20, 0, 20, 20],
    // Y19 秀朗橋
    &[50, 45, 45, 40, 40, 35, 35, 30, 30, 25, 25, 20, 20, 0, 20],
    // Y20 十四張
    &[55, 50, 45, 45, 40, 40, 35, 35, 30, 30, 25, 25, 20, 20, 0],
];
