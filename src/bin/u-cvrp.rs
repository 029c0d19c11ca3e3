use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_cvrp::config::SolveConfig;
use u_cvrp::distance::Metric;
use u_cvrp::engine::SearchParameters;
use u_cvrp::ingest::read_records_from_path;
use u_cvrp::report::{render_text, Report};
use u_cvrp::sample::city_blocks;
use u_cvrp::solver::plan;

fn cli() -> Command {
    Command::new("u-cvrp")
        .about("Capacitated vehicle routing with cheapest-arc construction")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Solves the built-in city-block instance")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves an instance read from CSV")
                .arg(
                    arg!(--config <CONFIG> "Path to a JSON solve configuration")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--input <INPUT> "Path to a CSV file of locations and demands")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--vehicles [VEHICLES] "Override the number of vehicles")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--capacity [CAPACITY] ... "Override vehicle capacities; one value is repeated for every vehicle")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(format_arg()),
        )
}

fn format_arg() -> clap::Arg {
    arg!(--format [FORMAT] "Output format")
        .value_parser(["text", "json"])
        .default_value("text")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("demo", sub_m)) => demo(sub_m),
        Some(("solve", sub_m)) => solve(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn demo(matches: &ArgMatches) -> Result<()> {
    let model = city_blocks().into_model()?;
    let report = plan(&model, Metric::Block, &SearchParameters::default())?;
    print_report(&report, matches)
}

fn solve(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .ok_or_else(|| anyhow!("--config is required"))?;
    let input_path = matches
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow!("--input is required"))?;

    let mut config = SolveConfig::from_path(config_path)?;
    apply_overrides(&mut config, matches);

    let records = read_records_from_path(input_path, &config.ingest_options())
        .with_context(|| format!("cannot read records from {}", input_path.display()))?;
    let model = config.build_model(&records)?;
    info!("Data model loaded");

    let report = plan(&model, config.metric, &config.parameters())?;
    print_report(&report, matches)
}

fn apply_overrides(config: &mut SolveConfig, matches: &ArgMatches) {
    if let Some(&vehicles) = matches.get_one::<usize>("vehicles") {
        config.num_vehicles = vehicles;
    }
    if let Some(capacities) = matches.get_many::<f64>("capacity") {
        let capacities: Vec<f64> = capacities.copied().collect();
        config.vehicle_capacities = match capacities.as_slice() {
            [single] => vec![*single; config.num_vehicles],
            _ => capacities,
        };
    }
}

fn print_report(report: &Report, matches: &ArgMatches) -> Result<()> {
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(report)?),
        _ => print!("{}", render_text(report)),
    }
    Ok(())
}
