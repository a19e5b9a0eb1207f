use cake_shop::core::drills::{film_drill, flight_drill, jaws, run_drill, sample_flight};
use cake_shop::domain::model::{Film, Flight};
use cake_shop::utils::logger;
use cake_shop::ConsoleSink;
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Drill {
    Film,
    Flight,
}

#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "Walk the film or flight records and print what they contain")]
struct Args {
    /// Which drill to run
    #[arg(value_enum)]
    drill: Drill,

    /// JSON file to use instead of the built-in record
    #[arg(long)]
    data: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load<T: DeserializeOwned>(path: &Path) -> cake_shop::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    tracing::info!("Running {:?} drill", args.drill);

    let lines = match (args.drill, args.data.as_deref()) {
        (Drill::Film, None) => film_drill(&jaws(), chrono::Local::now().year()),
        (Drill::Film, Some(path)) => {
            let film: Film = load(Path::new(path))?;
            film_drill(&film, chrono::Local::now().year())
        }
        (Drill::Flight, None) => flight_drill(&sample_flight()),
        (Drill::Flight, Some(path)) => {
            let flight: Flight = load(Path::new(path))?;
            flight_drill(&flight)
        }
    };

    let mut sink = ConsoleSink::stdout();
    run_drill(&lines, &mut sink)?;

    Ok(())
}
