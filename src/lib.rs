#![deny(clippy::all)]

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use clap::{value_t, App, AppSettings, Arg, ArgMatches};
use lazy_static::lazy_static;
use log::{debug, info};
use paste::paste;
use thiserror::Error;

use atlas::{datasets, City, Distance, GameMap, RoadMap};
use searcher::{Engine, Outcome, SearchOptions, Strategy, Veto};

type Error = anyhow::Error;
type MapLoader = fn() -> atlas::Result<RoadMap>;
type BoardLoader = fn() -> atlas::Result<GameMap>;

macro_rules! map {
    ($name:ident) => {
        paste! {
            (stringify!($name), datasets::[<$name _map>] as MapLoader)
        }
    };
}

macro_rules! board {
    ($name:ident) => {
        paste! {
            (stringify!($name), datasets::[<$name _board>] as BoardLoader)
        }
    };
}

lazy_static! {
    static ref MAPS: HashMap<&'static str, MapLoader> = {
        let maps: Vec<(&'static str, MapLoader)> =
            vec![map!(ethiopia), map!(ethiopia_moyale), map!(five_cities)];
        maps.into_iter().collect()
    };
    static ref BOARDS: HashMap<&'static str, BoardLoader> = {
        let boards: Vec<(&'static str, BoardLoader)> = vec![board!(highlands)];
        boards.into_iter().collect()
    };
}

const DEFAULT_MAP: &str = "ethiopia";
const DEFAULT_BOARD: &str = "highlands";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("A tour visits every city and takes no --to")]
    TourWithGoals,

    #[error("{0:?} is neither a bundled dataset nor a readable file")]
    NotFound(String),
}

/// Names of the bundled road maps, sorted.
pub fn map_names() -> Vec<&'static str> {
    let mut names: Vec<_> = MAPS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Names of the bundled game boards, sorted.
pub fn board_names() -> Vec<&'static str> {
    let mut names: Vec<_> = BOARDS.keys().copied().collect();
    names.sort_unstable();
    names
}

fn read_source(source: &str) -> Result<String, Error> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("Reading {}", source))
    }
}

/// Load a bundled map by name, or a map file by path (`-` for stdin).
pub fn load_map(source: &str) -> Result<RoadMap, Error> {
    if let Some(loader) = MAPS.get(source) {
        debug!("using bundled map {}", source);
        return Ok(loader()?);
    }
    if source != "-" && !Path::new(source).exists() {
        return Err(RouteError::NotFound(source.to_string()).into());
    }
    let map = read_source(source)?
        .parse()
        .with_context(|| format!("Parsing map {}", source))?;
    Ok(map)
}

/// Load a bundled game board by name, or a board file by path (`-` for stdin).
pub fn load_board(source: &str) -> Result<GameMap, Error> {
    if let Some(loader) = BOARDS.get(source) {
        debug!("using bundled board {}", source);
        return Ok(loader()?);
    }
    if source != "-" && !Path::new(source).exists() {
        return Err(RouteError::NotFound(source.to_string()).into());
    }
    let board = read_source(source)?
        .parse()
        .with_context(|| format!("Parsing board {}", source))?;
    Ok(board)
}

/// One search, as asked for on the command line.
#[derive(Debug, Clone)]
pub struct Request {
    pub strategy: Strategy,
    pub map: String,
    pub board: String,
    pub from: City,
    pub to: Vec<City>,
    pub tour: bool,
    pub options: SearchOptions,
}

impl Request {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let strategy: Strategy = matches.value_of("strategy").unwrap_or_default().parse()?;

        let step_limit = if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        };

        let veto = match matches.value_of("veto") {
            Some("edge") => Veto::EdgeOnly,
            _ => Veto::WholeNode,
        };

        let mut options = SearchOptions::default()
            .with_reverse_neighbors(matches.is_present("reverse"))
            .with_veto(veto);
        options.step_limit = step_limit;

        let to: Vec<City> = matches
            .values_of("to")
            .map(|values| values.map(String::from).collect())
            .unwrap_or_default();

        let tour = matches.is_present("tour");
        if tour && !to.is_empty() {
            return Err(RouteError::TourWithGoals.into());
        }

        Ok(Request {
            strategy,
            map: matches.value_of("map").unwrap_or(DEFAULT_MAP).to_string(),
            board: matches.value_of("board").unwrap_or(DEFAULT_BOARD).to_string(),
            from: matches.value_of("from").unwrap_or_default().to_string(),
            to,
            tour,
            options,
        })
    }

    /// Load the data this request needs and run it.
    pub fn run(&self) -> Result<Outcome<City, Distance>, Error> {
        info!("{} from {} on {}", self.strategy, self.from, self.map);

        if self.strategy == Strategy::Minimax {
            let game = load_board(&self.board)?;
            let start = game.city(&self.from)?;
            let goals = self
                .to
                .iter()
                .map(|goal| game.city(goal))
                .collect::<atlas::Result<Vec<City>>>()?;
            let engine = Engine::new()
                .with_board(&game.board)
                .with_options(self.options.clone());
            return Ok(engine.run(self.strategy, &start, &goals)?);
        }

        let map = load_map(&self.map)?;
        let start = map.city(&self.from)?;
        let goals = self
            .to
            .iter()
            .map(|goal| map.city(goal))
            .collect::<atlas::Result<Vec<City>>>()?;
        let engine = map.engine().with_options(self.options.clone());

        if self.tour {
            Ok(Outcome::Route(engine.tour(self.strategy, &start)?))
        } else {
            Ok(engine.run(self.strategy, &start, &goals)?)
        }
    }
}

/// Render a search result for the terminal.
pub fn report(outcome: &Outcome<City, Distance>) -> String {
    match outcome {
        Outcome::Route(route) => format!(
            "Path: {}\nCost: {}\nExplored: {} cities",
            route.path.join(" -> "),
            route.cost,
            route.explored.len()
        ),
        Outcome::Verdict(verdict) => {
            format!("Path: {}\nValue: {}", verdict.path.join(" -> "), verdict.value)
        }
        Outcome::NotFound => "No path found".to_string(),
    }
}

pub fn app() -> App<'static, 'static> {
    App::new("Route Finder")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search for routes between Ethiopian cities")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .help("bfs, dfs, ucs, weighted-bfs, a-star, multi-goal-ucs or minimax")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("map")
                .long("map")
                .short("m")
                .value_name("NAME|PATH")
                .help("Bundled map name or road map file, - for stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("board")
                .long("board")
                .value_name("NAME|PATH")
                .help("Bundled game board or board file, for minimax")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .short("f")
                .value_name("CITY")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .short("t")
                .value_name("CITY")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("tour")
                .long("tour")
                .help("Visit every city on the map"),
        )
        .arg(
            Arg::with_name("reverse")
                .long("reverse")
                .help("Expand each city's roads in reverse order"),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after this many expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("veto")
                .long("veto")
                .takes_value(true)
                .possible_values(&["node", "edge"])
                .default_value("node")
                .help("Whether an adversary edge blocks its whole city or only itself"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for more detail"),
        )
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    init_logging(matches.occurrences_of("verbose"));
    debug!("maps: {:?}, boards: {:?}", map_names(), board_names());

    let request = Request::from_matches(&matches)?;
    let outcome = request.run()?;
    println!("{}", report(&outcome));
    Ok(())
}
