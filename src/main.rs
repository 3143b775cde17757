use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use goap_woodcutter::{report, Action, Goal, HeuristicKind, Planner, PlannerConfig, WorldState};

/// Plan how a woodcutter gets from a forest to a finished house.
#[derive(Parser, Debug)]
#[command(name = "goap-woodcutter", version, about)]
struct Cli {
    /// Wood still standing in the forest
    #[arg(long, default_value_t = 10)]
    forest_wood: i64,

    /// Wood currently carried
    #[arg(long, default_value_t = 0)]
    hand_wood: i64,

    /// Wood already piled at the building site
    #[arg(long, default_value_t = 0)]
    piled_wood: i64,

    /// 1 if the house already stands
    #[arg(long, default_value_t = 0)]
    has_house: i64,

    /// Wood a house consumes
    #[arg(long, default_value_t = 5)]
    wood_needed: i64,

    /// Wood carried per trip
    #[arg(long, default_value_t = 3)]
    capacity: i64,

    /// Goal requirement as FACT=VALUE; repeatable. Defaults to HasHouse=1
    #[arg(long = "goal", value_parser = parse_requirement)]
    goal: Vec<(String, i64)>,

    #[arg(long, value_enum, default_value_t = HeuristicArg::House)]
    heuristic: HeuristicArg,

    /// Give up after this many expanded states
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Write the plan's state trajectory as Graphviz DOT
    #[arg(long)]
    dot: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    House,
    GoalDistance,
    Zero,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::House => HeuristicKind::House,
            HeuristicArg::GoalDistance => HeuristicKind::GoalDistance,
            HeuristicArg::Zero => HeuristicKind::Zero,
        }
    }
}

fn parse_requirement(raw: &str) -> Result<(String, i64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FACT=VALUE, got '{}'", raw))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value in '{}': {}", raw, e))?;
    Ok((key.trim().to_string(), value))
}

fn run(cli: Cli) -> goap_woodcutter::Result<bool> {
    let start = WorldState::from_facts([
        ("ForestWood", cli.forest_wood),
        ("HandWood", cli.hand_wood),
        ("PiledWood", cli.piled_wood),
        ("HasHouse", cli.has_house),
        ("wood_needed_for_house", cli.wood_needed),
        ("transport_capacity", cli.capacity),
    ])?;
    let goal = if cli.goal.is_empty() {
        Goal::house()
    } else {
        Goal::from_facts(cli.goal)?
    };

    let mut config = PlannerConfig::default().with_heuristic(cli.heuristic.into());
    config.max_expansions = cli.max_expansions;

    log::info!("Start state: {}", start);
    let planner = Planner::with_config(Action::ALL.to_vec(), config);
    let plan = planner.plan(&start, &goal)?;

    print!("{}", report::render_text(&goal, plan.as_ref()));

    if let (Some(path), Some(plan)) = (&cli.dot, &plan) {
        report::write_dot(path, &start, &goal, plan)?;
        log::info!("Wrote plan graph to {}", path.display());
    }
    Ok(plan.is_some())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
