//! taoyuan airport MRT station data and distance-band fare table.
//! single A line, 22 stations; express trains skip the non-express stops.
//!
//! no official matrix is bundled; fares are estimated from station index
//! differences through the band table below, covering the line's 30-160
//! fare range.

use crate::station::Station;

pub const STATIONS: &[Station] = &[
    Station::express("A1", "台北車站", "Taipei Main Station", "A"),
    Station::new("A2", "三重", "Sanchong", "A"),
    Station::express("A3", "新北產業園區", "New Taipei Industrial Park", "A"),
    Station::new("A4", "新莊副都心", "Xinzhuang Fuduxin", "A"),
    Station::new("A5", "泰山", "Taishan", "A"),
    Station::new("A6", "泰山貴和", "Taishan Guihe", "A"),
    Station::new("A7", "體育大學", "National Sports University", "A"),
    Station::express("A8", "長庚醫院", "Chang Gung Memorial Hospital", "A"),
    Station::new("A9", "林口", "Linkou", "A"),
    Station::new("A10", "山鼻", "Shanbi", "A"),
    Station::new("A11", "坑口", "Kengkou", "A"),
    Station::express("A12", "機場第一航廈", "Airport Terminal 1", "A"),
    Station::express("A13", "機場第二航廈", "Airport Terminal 2", "A"),
    Station::new("A14a", "機場旅館", "Airport Hotel", "A"),
    Station::new("A15", "大園", "Dayuan", "A"),
    Station::new("A16", "橫山", "Hengshan", "A"),
    Station::new("A17", "領航", "Linghang", "A"),
    Station::express("A18", "高鐵桃園站", "HSR Taoyuan", "A"),
    Station::new("A19", "桃園體育園區", "Taoyuan Sports Park", "A"),
    Station::new("A20", "興南", "Xingnan", "A"),
    Station::express("A21", "環北", "Huanbei", "A"),
    Station::new("A22", "老街溪", "Laojie Creek", "A"),
];

/// (max station-count, fare) breakpoints for the airport line.
pub const FARE_BANDS: &[(u32, u32)] = &[
    (1, 30),
    (3, 45),
    (5, 60),
    (7, 75),
    (9, 90),
    (11, 105),
    (13, 120),
    (16, 135),
    (19, 150),
];

pub const MAX_FARE: u32 = 160;
