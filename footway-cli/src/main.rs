//! # Footway CLI
//!
//! Loads a campus map and answers shortest walking route queries between
//! buildings typed on standard input.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use footway::{
    algo::shortest_paths,
    map::{self, Coordinates, MapData, Navigator},
};
use log::{debug, error, LevelFilter};

/// Command-line interface for footway
#[derive(Parser)]
#[command(name = "footway")]
#[command(about = "Shortest walking routes between campus buildings")]
#[command(long_about = "Loads a campus map and repeatedly asks for a start and a destination
building, given by abbreviation or a part of the full name:
  footway                          # Use map.json in the current directory
  footway uic.json                 # Use given map file
  footway uic.json -v              # Log graph construction and search details

Enter # as the start building to quit.")]
#[command(version)]
struct Cli {
    /// Map file in JSON format with nodes, footways and buildings
    #[arg(default_value = "map.json")]
    map: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr so that it does not mix with the dialog.
    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let map = load_map(&cli.map)?;
    let navigator = Navigator::new(map);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&navigator, stdin.lock(), stdout.lock())
        .context("failed to interact with the user")?;

    Ok(())
}

fn load_map(path: &Path) -> Result<MapData> {
    let file = File::open(path)
        .with_context(|| format!("unable to open map file {}", path.display()))?;

    let map: MapData = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("unable to load map from {}", path.display()))?;

    debug!("loaded map from {}", path.display());

    Ok(map)
}

/// Prints map statistics and answers queries until `#` or end of input.
fn session<R, W>(navigator: &Navigator, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let map = navigator.map();
    let graph = &navigator.walkways().graph;

    writeln!(out, "** Navigating campus map **")?;
    writeln!(out)?;
    writeln!(out, "# of nodes: {}", map.nodes.len())?;
    writeln!(out, "# of footways: {}", map.footways.len())?;
    writeln!(out, "# of buildings: {}", map.buildings.len())?;
    writeln!(out, "# of vertices: {}", graph.vertex_count())?;
    writeln!(out, "# of edges: {}", graph.edge_count())?;
    writeln!(out)?;

    loop {
        write!(out, "Enter start (partial name or abbreviation), or #> ")?;
        out.flush()?;

        let start = match read_line(&mut input)? {
            Some(line) if line != "#" => line,
            _ => break,
        };

        write!(out, "Enter destination (partial name or abbreviation)> ")?;
        out.flush()?;

        let Some(destination) = read_line(&mut input)? else {
            break;
        };

        answer(navigator, &start, &destination, &mut out)?;
        writeln!(out)?;
    }

    writeln!(out, "** Done **")
}

fn answer<W: Write>(
    navigator: &Navigator,
    start: &str,
    destination: &str,
    out: &mut W,
) -> io::Result<()> {
    let trip = match navigator.locate(start, destination) {
        Ok(trip) => trip,
        Err(map::Error::StartNotFound) => return writeln!(out, "Start building not found"),
        Err(map::Error::DestinationNotFound) => {
            return writeln!(out, "Destination building not found")
        }
        Err(e) => return writeln!(out, "Sorry, {e}"),
    };

    writeln!(out, "Starting point:")?;
    writeln!(out, " {}", trip.start.fullname)?;
    writeln!(out, " {}", coords(&trip.start.coords))?;
    writeln!(out, "Destination point:")?;
    writeln!(out, " {}", trip.destination.fullname)?;
    writeln!(out, " {}", coords(&trip.destination.coords))?;
    writeln!(out)?;

    writeln!(out, "Nearest start node:")?;
    writeln!(out, " {}", trip.start_node.node)?;
    writeln!(out, " {}", coords(&trip.start_node.coords))?;
    writeln!(out, "Nearest destination node:")?;
    writeln!(out, " {}", trip.destination_node.node)?;
    writeln!(out, " {}", coords(&trip.destination_node.coords))?;
    writeln!(out)?;

    writeln!(out, "Navigating with Dijkstra...")?;

    match navigator.route(&trip) {
        Ok(route) => {
            let path = route
                .path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("->");

            writeln!(
                out,
                "Distance to dest: {} miles",
                significant(route.distance)
            )?;
            writeln!(out, "Path: {path}")
        }
        Err(map::Error::ShortestPath(shortest_paths::Error::Unreachable)) => {
            writeln!(out, "Sorry, destination unreachable")
        }
        Err(e) => writeln!(out, "Sorry, {e}"),
    }
}

fn coords(coords: &Coordinates) -> String {
    format!("({}, {})", significant(coords.lat), significant(coords.lon))
}

/// Formats a number with at most 8 significant digits, switching to the
/// exponent notation for very small and very large magnitudes.
fn significant(value: f64) -> String {
    const DIGITS: i32 = 8;

    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the significant digits may carry over to the exponent.
    let scientific = format!("{:.*e}", (DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or(0);

    if (-4..DIGITS).contains(&exponent) {
        let decimals = (DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}
