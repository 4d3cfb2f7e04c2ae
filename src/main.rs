use clap::Parser;
use costsearch::search::{
    grid::{CostModel, GridProblem},
    heuristics::GridHeuristicNames,
    search_engines::{SearchEngineName, SearchLimits, SearchResult},
    validate, Verbosity,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Search for a cheap path on a grid map.")]
struct Args {
    #[arg(help = "The path to the map file", id = "MAP")]
    map: PathBuf,
    #[arg(short, long, value_enum, default_value = "weighted-dfs")]
    engine: SearchEngineName,
    #[arg(long, value_enum, default_value = "zero")]
    heuristic: GridHeuristicNames,
    #[arg(long, value_enum, default_value = "step")]
    cost_model: CostModel,
    #[arg(long, value_parser = humantime::parse_duration, help = "Wall-clock budget, e.g. 30s or 5m")]
    time_limit: Option<Duration>,
    #[arg(long, help = "Peak memory budget in MiB")]
    memory_limit_mb: Option<usize>,
    #[arg(long, help = "Budget on the number of expanded nodes")]
    expansion_limit: Option<usize>,
    #[arg(long, help = "TOML file with search limits; the flags above override it")]
    limits: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "normal")]
    verbosity: Verbosity,
}

fn search_limits(args: &Args) -> SearchLimits {
    let mut limits = match &args.limits {
        Some(path) => toml::from_str(
            &std::fs::read_to_string(path)
                .expect("Unable to load the limits file, does it exist?"),
        )
        .expect("Unable to parse the limits file, is it valid?"),
        None => SearchLimits::default(),
    };
    if let Some(time_limit) = args.time_limit {
        limits.time_limit_secs = Some(time_limit.as_secs_f64());
    }
    if args.memory_limit_mb.is_some() {
        limits.memory_limit_mb = args.memory_limit_mb;
    }
    if args.expansion_limit.is_some() {
        limits.expansion_limit = args.expansion_limit;
    }
    limits
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(args.verbosity))
        .init();

    let problem = match GridProblem::from_path(&args.map, args.cost_model) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    // Uniform-cost search is A* with the zero heuristic, whatever was asked
    // for on the command line.
    let mut heuristic = match args.engine {
        SearchEngineName::UCS => GridHeuristicNames::ZeroHeuristic.create(),
        _ => args.heuristic.create(),
    };
    let mut engine = args.engine.create(search_limits(&args));

    let (result, mut statistics) = engine.search(&problem, heuristic.as_mut());
    statistics.log();

    match result {
        SearchResult::Success(path) => {
            if let Err(error) = validate(&path, &problem) {
                eprintln!("engine returned an invalid path: {error}");
                std::process::exit(2);
            }
            info!(cost = path.cost(), states = path.len());
            println!("{}", path.render());
        }
        other => {
            eprintln!("no path found: {other:?}");
            std::process::exit(1);
        }
    }
}
