//! Maps bundled with the crate.
//!
//! Travel times are in hours except for [five_cities_map], which uses
//! kilometres.

use crate::errors::Result;
use crate::{GameMap, RoadMap};

const ETHIOPIA: &str = include_str!("../data/ethiopia.roads");
const ETHIOPIA_MOYALE: &str = include_str!("../data/ethiopia_moyale.roads");
const FIVE_CITIES: &str = include_str!("../data/five_cities.roads");
const HIGHLANDS: &str = include_str!("../data/highlands.game");

/// Road network between Ethiopian regional towns and a few neighbours abroad.
pub fn ethiopia_map() -> Result<RoadMap> {
    ETHIOPIA.parse()
}

/// The same network with estimated hours to Moyale, for A*.
///
/// The estimates overestimate in the far north, so they are only a lower
/// bound for routes starting south of Kemise.
pub fn ethiopia_moyale_map() -> Result<RoadMap> {
    ETHIOPIA_MOYALE.parse()
}

pub fn five_cities_map() -> Result<RoadMap> {
    FIVE_CITIES.parse()
}

/// Game board around Addis Ababa with two adversary edges.
pub fn highlands_board() -> Result<GameMap> {
    HIGHLANDS.parse()
}
