use anyhow::{bail, Result};
use clap::Parser;
use hoopval::contracts::ContractsDf;
use hoopval::filter::PlayerFilter;
use hoopval::stats::StatsDf;
use hoopval::{report, PlayerDf, Position, Scoring};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Contracts CSV export
    #[arg(short = 'c', long = "contracts", value_name = "FILE")]
    contracts: std::path::PathBuf,

    /// Per-game stats CSV export
    #[arg(short = 's', long = "stats", value_name = "FILE")]
    stats: std::path::PathBuf,

    /// Contract-year column holding the salary to analyze
    #[arg(long, default_value = "2022-23")]
    season: String,

    /// Report to print: mvp, overpaid, or fit
    #[arg(short = 'r', long, default_value = "mvp")]
    report: String,

    /// Only report players on this team
    #[arg(short = 't', long = "team")]
    team: Option<String>,

    /// Only report players listed at this position (PG, SG, SF, PF, C)
    #[arg(short = 'p', long = "position")]
    position: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the default level based on verbosity
    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().add_filter_allow_str("hoopval::").build();

    // Initialize the logger with the custom configuration
    TermLogger::init(
        default_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    log::trace!("Args {:#?}", args);

    let contracts = ContractsDf::load(&args.contracts)?
        .project(&args.season)?
        .unique_players()?;
    log::info!("Loaded {} contracts", contracts.height());

    let stats = StatsDf::load(&args.stats)?.project()?.unique_players()?;
    log::info!("Loaded {} stat lines", stats.height());

    let mut filter = PlayerFilter::new();
    if let Some(team) = &args.team {
        filter = filter.team(team);
    }
    if let Some(position) = &args.position {
        let Ok(position) = position.to_uppercase().parse::<Position>() else {
            bail!("Unsupported position. Use: PG, SG, SF, PF, or C");
        };
        filter = filter.position(position);
    }

    let players = PlayerDf::merge(contracts, stats)?
        .drop_incomplete()?
        .filter(filter.build())?
        .players()?;
    let rated = hoopval::scoring::rate_players(players, Scoring::league_average());

    match &*args.report {
        "mvp" => {
            println!("Most Valuable Players:\n");
            for (name, value) in report::rank_by_value(&rated) {
                println!("{name} {value:.2}");
            }
        }
        "overpaid" => {
            println!("Most Overpaid Players:\n");
            for (name, ratio) in report::rank_by_ratio(&rated) {
                println!("{name} {ratio:.2}");
            }
        }
        "fit" => {
            let pairs = report::salary_value_pairs(&rated);
            match fit_line(&pairs) {
                Some((slope, intercept)) => {
                    println!("Player Value vs. Salary");
                    println!("value = {slope:.10} * salary + {intercept:.4}");
                    for (salary, value) in pairs {
                        println!("{salary:.0} {value:.2}");
                    }
                }
                None => println!("Not enough players to fit a line"),
            }
        }
        _ => bail!("Unsupported report. Use: mvp, overpaid, or fit"),
    }

    Ok(())
}

/// Ordinary least squares of value score on salary, with an intercept term.
/// Returns (slope, intercept), or None when the points can't pin down a line.
fn fit_line(pairs: &[(f64, f64)]) -> Option<(f64, f64)> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = pairs.iter().map(|(x, _)| (x - mean_x) * (x - mean_x)).sum();
    let sxy: f64 = pairs
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Some((slope, intercept))
}
