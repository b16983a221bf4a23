use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use flightrisk::map::{HeadlessView, init_map};
use flightrisk::presenter::{self, MAP_NOT_CONFIGURED, NO_RESULTS};
use flightrisk::{
    AirportIndex, App, FlightRiskConfig, FlightRiskError, HeadlessMapProvider,
    HttpAssessmentClient, Update, telemetry,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FLIGHTRISK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// One line of terminal input
#[derive(Debug, PartialEq)]
enum Command {
    Query(String),
    Select(String),
    Open(usize),
    Click(String),
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Query(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();
    match (name, argument) {
        ("select", Some(iata)) => Ok(Command::Select(iata.to_string())),
        ("click", Some(iata)) => Ok(Command::Click(iata.to_string())),
        ("open", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Command::Open(n)),
            _ => Err(format!("'{n}' is not a result number")),
        },
        ("help", _) => Ok(Command::Help),
        ("quit" | "q", _) => Ok(Command::Quit),
        _ => Err(format!("Unknown command ':{rest}'. Type :help for commands.")),
    }
}

const HELP: &str = "\
  <text>         search airports by IATA code, name, city, state or region
  :open N        select the N-th search result
  :select IATA   select an airport by IATA code
  :click IATA    click the map marker for IATA
  :quit          exit";

fn print_results(app: &App) {
    let cards = app.result_cards();
    if cards.is_empty() {
        println!("{NO_RESULTS}");
        return;
    }
    println!("Search Results");
    for (n, card) in cards.iter().enumerate() {
        println!("{:>3}.{}", n + 1, card);
    }
}

fn print_assessment(app: &App) {
    match app.assessment() {
        Some(view) => print!("{view}"),
        None => {
            for line in presenter::placeholder() {
                println!("{line}");
            }
        }
    }
}

fn render(app: &App, update: Update) {
    match update {
        Update::Results(_) => print_results(app),
        Update::Selected(_) | Update::Assessment(_) => print_assessment(app),
        Update::Ignored => {}
    }
}

fn run_command(app: &mut App, map_view: Option<&HeadlessView>, command: Command) {
    match command {
        Command::Query(query) => {
            let update = app.handle(flightrisk::AppEvent::QueryChanged(query));
            render(app, update);
        }
        Command::Select(iata) => match app.select_code(&iata) {
            Some(id) => render(app, Update::Selected(id)),
            None => println!("Unknown airport '{iata}'"),
        },
        Command::Open(n) => match app.select_result(n - 1) {
            Some(id) => render(app, Update::Selected(id)),
            None => println!("No result number {n}"),
        },
        // The click arrives back through the event channel
        Command::Click(iata) => match map_view {
            Some(view) if view.click(&iata.to_ascii_uppercase()) => {
                debug!("Clicked marker {}", iata);
            }
            Some(_) => println!("No marker for '{iata}' on the map"),
            None => println!("{MAP_NOT_CONFIGURED}"),
        },
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

enum Step {
    Line(Option<String>),
    Event(Option<flightrisk::AppEvent>),
}

/// Text shown when startup fails: the friendly message for our own errors,
/// then the full cause chain
fn startup_error_text(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FlightRiskError>() {
        Some(e) => format!("{}\n  {err:#}", e.user_message()),
        None => format!("Error: {err:#}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", startup_error_text(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = FlightRiskConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose)?;
    info!("Starting FlightRisk v{}", flightrisk::VERSION);

    let index = match &config.airports.path {
        Some(path) => AirportIndex::load_json(path)
            .with_context(|| format!("Failed to load airports from {}", path.display()))?,
        None => AirportIndex::builtin(),
    };
    info!("Loaded {} airports", index.len());

    let client = Arc::new(HttpAssessmentClient::new(&config.providers)?);
    let map_provider = HeadlessMapProvider::with_api_key(config.map.api_key.clone());
    let map = init_map(&map_provider, &config.map);
    let map_view = map.is_some().then(|| map_provider.view());

    let mut app = App::new(Arc::new(index), map, client.clone(), client);

    if map_view.is_none() {
        println!("{MAP_NOT_CONFIGURED}");
    }
    print_assessment(&app);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let step = tokio::select! {
            line = lines.next_line() => Step::Line(line?),
            event = app.next_event() => Step::Event(event),
        };

        match step {
            Step::Line(None) | Step::Event(None) => break,
            Step::Line(Some(line)) => match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => run_command(&mut app, map_view.as_ref(), command),
                Err(message) => println!("{message}"),
            },
            Step::Event(Some(event)) => {
                let update = app.handle(event);
                render(&app, update);
            }
        }
    }

    app.teardown_map();
    info!("FlightRisk stopped");
    Ok(())
}
