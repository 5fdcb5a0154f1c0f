use std::fs;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use searcher::Board;

use crate::errors::{AtlasError, Result};
use crate::{content, City};

lazy_static! {
    static ref PASSAGE: Regex =
        Regex::new(r"^(?P<from>\w[\w .'-]*?)\s*->\s*(?P<to>\w[\w .'-]*?)(?P<adversary>\s*!)?$")
            .unwrap();
    static ref TERMINAL: Regex =
        Regex::new(r"^(?P<city>\w[\w .'-]*?)\s*=\s*(?P<utility>\S+)$").unwrap();
    static ref CITY: Regex = Regex::new(r"^(?P<city>\w[\w .'-]*?)$").unwrap();
}

/// A game board for the adversarial search.
///
/// ```text
/// Harar = 10
/// Diredawa
/// Diredawa -> Harar
/// Adama -> Addis Ababa !
/// ```
///
/// `City = n` makes a terminal city worth `n`, a bare name declares an
/// ordinary city, and `!` marks an edge held by the adversary.
#[derive(Debug, Clone, Default)]
pub struct GameMap {
    pub board: Board<City>,
}

impl GameMap {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading game board from {}", path.display());
        fs::read_to_string(path)?.parse()
    }

    /// Look up a city named anywhere on the map, including cities which
    /// only appear as a destination.
    pub fn city(&self, name: &str) -> Result<City> {
        let city = name.to_string();
        if self.board.mentions(&city) {
            Ok(city)
        } else {
            Err(AtlasError::UnknownCity(city))
        }
    }
}

impl FromStr for GameMap {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::new();

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let text = content(raw);
            if text.is_empty() {
                continue;
            }

            if let Some(cap) = PASSAGE.captures(text) {
                board.insert_passage(
                    cap["from"].to_string(),
                    cap["to"].to_string(),
                    cap.name("adversary").is_some(),
                );
            } else if let Some(cap) = TERMINAL.captures(text) {
                let utility = cap["utility"]
                    .parse()
                    .map_err(|_| AtlasError::InvalidNumber {
                        line,
                        text: cap["utility"].to_string(),
                    })?;
                board.insert_terminal(cap["city"].to_string(), utility);
            } else if let Some(cap) = CITY.captures(text) {
                board.insert_node(cap["city"].to_string());
            } else {
                return Err(AtlasError::Syntax {
                    line,
                    text: text.to_string(),
                });
            }
        }

        if board.is_empty() {
            return Err(AtlasError::Empty);
        }

        debug!("parsed game board with {} cities", board.len());
        Ok(GameMap { board })
    }
}
