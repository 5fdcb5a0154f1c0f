use std::fs;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use searcher::{Engine, Estimates, Graph};

use crate::errors::{AtlasError, Result};
use crate::{content, City, Distance};

lazy_static! {
    static ref ROAD: Regex =
        Regex::new(r"^(?P<from>\w[\w .'-]*?)\s*->\s*(?P<to>\w[\w .'-]*?)\s*=\s*(?P<weight>\S+)$")
            .unwrap();
    static ref ESTIMATE: Regex =
        Regex::new(r"^(?P<city>\w[\w .'-]*?)\s*~\s*(?P<estimate>\S+)$").unwrap();
    static ref CITY: Regex = Regex::new(r"^(?P<city>\w[\w .'-]*?)$").unwrap();
}

fn number(line: usize, text: &str) -> Result<Distance> {
    text.parse().map_err(|_| AtlasError::InvalidNumber {
        line,
        text: text.to_string(),
    })
}

/// A road network, with estimates towards one goal when the map has them.
///
/// The text format has one entry per line:
///
/// ```text
/// # comment
/// Addis Ababa -> Adama = 3
/// Adama ~ 23
/// Moyale
/// ```
///
/// which declare a road with its weight, an estimate of the remaining cost
/// from a city, and a city with no roads of its own.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    pub graph: Graph<City, Distance>,
    pub estimates: Option<Estimates<City, Distance>>,
}

impl RoadMap {
    /// Read a map from a file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading map from {}", path.display());
        fs::read_to_string(path)?.parse()
    }

    /// An engine pointed at this map's graph and estimates.
    pub fn engine(&self) -> Engine<'_, City, Distance> {
        let engine = Engine::new().with_graph(&self.graph);
        match &self.estimates {
            Some(estimates) => engine.with_estimates(estimates),
            None => engine,
        }
    }

    /// Look up a city named anywhere on the map, including cities which
    /// only appear as a destination.
    pub fn city(&self, name: &str) -> Result<City> {
        let city = name.to_string();
        if self.graph.mentions(&city) {
            Ok(city)
        } else {
            Err(AtlasError::UnknownCity(city))
        }
    }
}

impl FromStr for RoadMap {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        let mut map = RoadMap::default();

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let text = content(raw);
            if text.is_empty() {
                continue;
            }

            if let Some(cap) = ROAD.captures(text) {
                let weight = number(line, &cap["weight"])?;
                map.graph
                    .insert_road(cap["from"].to_string(), cap["to"].to_string(), weight)
                    .map_err(|source| AtlasError::Rejected { line, source })?;
            } else if let Some(cap) = ESTIMATE.captures(text) {
                let estimate = number(line, &cap["estimate"])?;
                map.estimates
                    .get_or_insert_with(Estimates::new)
                    .insert(cap["city"].to_string(), estimate)
                    .map_err(|source| AtlasError::Rejected { line, source })?;
            } else if let Some(cap) = CITY.captures(text) {
                map.graph.insert_node(cap["city"].to_string());
            } else {
                return Err(AtlasError::Syntax {
                    line,
                    text: text.to_string(),
                });
            }
        }

        if map.graph.is_empty() {
            return Err(AtlasError::Empty);
        }

        debug!(
            "parsed {} cities, {} roads, {} estimates",
            map.graph.len(),
            map.graph.roads().count(),
            map.estimates.as_ref().map_or(0, |e| e.len())
        );
        Ok(map)
    }
}
