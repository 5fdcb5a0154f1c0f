//! Road maps and game boards for the route searches.
//!
//! Maps are written in a small line-oriented text format and parsed into
//! [searcher] graphs, heuristic tables and game boards. The Ethiopian
//! demonstration maps are bundled with the crate, see [datasets].

#![deny(clippy::all)]

pub mod datasets;
mod errors;
mod game;
mod roads;

pub use errors::{AtlasError, Result};
pub use game::GameMap;
pub use roads::RoadMap;

/// Node label used by every map.
pub type City = String;

/// Road weight used by every map, in whatever unit the map chooses.
pub type Distance = u32;

/// Strip a trailing `#` comment and surrounding whitespace.
pub(crate) fn content(line: &str) -> &str {
    match line.find('#') {
        Some(index) => line[..index].trim(),
        None => line.trim(),
    }
}
