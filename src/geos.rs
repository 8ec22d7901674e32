// src/geos.rs
//
// Fixed reference data for the dashboard: coordinates, bracket labels and
// widget option lists. Orders here are the orders the UI shows.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

const fn c(lat: f64, lon: f64) -> Coord {
    Coord { lat, lon }
}

/// Sentinel district value meaning "no district filter".
pub const ALL_DISTRICTS: &str = "전체";

/// Seoul City Hall.
pub const CITY_CENTER: Coord = c(37.5665, 126.9780);

pub const DISTRICT_ZOOM: u8 = 13;
pub const CITY_ZOOM: u8 = 11;

pub const SEOUL_DISTRICTS: &[(&str, Coord)] = &[
    ("종로구", c(37.572950, 126.979357)),
    ("중구", c(37.563757, 126.997730)),
    ("용산구", c(37.532600, 126.990860)),
    ("성동구", c(37.563680, 127.036580)),
    ("광진구", c(37.538420, 127.082550)),
    ("동대문구", c(37.574400, 127.039390)),
    ("중랑구", c(37.606570, 127.092720)),
    ("성북구", c(37.589910, 127.016900)),
    ("강북구", c(37.639970, 127.025980)),
    ("도봉구", c(37.668530, 127.047980)),
    ("노원구", c(37.654290, 127.056950)),
    ("은평구", c(37.602570, 126.929620)),
    ("서대문구", c(37.579680, 126.936880)),
    ("마포구", c(37.566680, 126.901450)),
    ("양천구", c(37.516340, 126.866940)),
    ("강서구", c(37.550940, 126.849530)),
    ("구로구", c(37.495650, 126.887770)),
    ("금천구", c(37.456430, 126.895160)),
    ("영등포구", c(37.526640, 126.896210)),
    ("동작구", c(37.512650, 126.939930)),
    ("관악구", c(37.478090, 126.951590)),
    ("서초구", c(37.483570, 127.032660)),
    ("강남구", c(37.517200, 127.047320)),
    ("송파구", c(37.514560, 127.105570)),
    ("강동구", c(37.530130, 127.123820)),
];

/// Hand-picked complexes highlighted on the map when they appear in results.
/// Names are matched as substrings of the listing's building name.
pub const CURATED_BUILDINGS: &[(&str, Coord)] = &[
    ("송파호반베르디움더퍼스트", c(37.5083, 127.1056)),
    ("송파파크데일1단지", c(37.498914, 127.159191)),
    ("송파파크데일2단지", c(37.4963394415, 127.1581638948)),
    ("위례신도시송파푸르지오", c(37.4699015, 127.151302167)),
];

pub const YEAR_BRACKETS: &[&str] = &[
    "2020년대",
    "2010년대",
    "2000년대",
    "1990년대",
    "1980년대",
    "1979년 이하",
];

/// The year selector starts on the third bracket.
pub const DEFAULT_YEAR_INDEX: usize = 2;

pub const BUILDING_TYPES: &[&str] = &["연립다세대", "아파트", "오피스텔", "단독다가구"];

pub const AREA_BRACKETS: &[&str] = &[
    "10평 미만",
    "10평대",
    "20평대",
    "50평대",
    "30평대",
    "60평대 이상",
    "40평대",
];

pub const FLOOR_BRACKETS: &[&str] = &[
    "05층이하",
    "10층이하",
    "15층이하",
    "20층이하",
    "00층 이하",
    "30층이하",
    "40층이하",
    "50층이하",
];

pub const FLOOR_CEILINGS: &[(&str, u32)] = &[
    ("00층 이하", 0),
    ("05층이하", 5),
    ("10층이하", 10),
    ("15층이하", 15),
    ("20층이하", 20),
    ("30층이하", 30),
    ("40층이하", 40),
    ("50층이하", 50),
];

/// Ceiling used when a floor label is not in `FLOOR_CEILINGS`.
pub const DEFAULT_FLOOR_CEILING: u32 = 50;

pub fn district_coord(name: &str) -> Option<Coord> {
    SEOUL_DISTRICTS
        .iter()
        .find(|(district, _)| *district == name)
        .map(|(_, coord)| *coord)
}

/// District selector values: the "all" sentinel followed by every district.
pub fn district_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(ALL_DISTRICTS).chain(SEOUL_DISTRICTS.iter().map(|(name, _)| *name))
}
