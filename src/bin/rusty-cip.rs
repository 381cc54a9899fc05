//! rusty-cip CLI - price FX forwards from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Price the default scenario
//! rusty-cip price
//!
//! # Price custom inputs and save the evaluation
//! rusty-cip price --spot 1.10 --domestic 5.0 --foreign 3.0 --output result.json
//!
//! # Check inputs without pricing
//! rusty-cip validate --spot 0 --domestic 2.36 --foreign 2.43
//!
//! # Forward curve over the foreign rate
//! rusty-cip sweep --from -2 --to 8 --steps 21 --output curve.csv
//! ```

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_cip::constants::{
    ARBITRAGE_TOLERANCE, INITIAL_INVESTMENT, MAX_RATE_PCT, MAX_SPOT_RATE, MAX_SWEEP_STEPS,
    MIN_RATE_PCT,
};
use rusty_cip::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// rusty-cip: covered interest rate parity forward pricer
#[derive(Parser)]
#[command(name = "rusty-cip")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "Forward FX pricing under covered interest rate parity", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate inputs and price the forward
    Price {
        #[command(flatten)]
        rates: RateArgs,

        /// Output file for the evaluation (JSON) or chart data (CSV)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Validate inputs only
    Validate {
        #[command(flatten)]
        rates: RateArgs,
    },

    /// Forward curve over a range of foreign rates
    Sweep {
        #[command(flatten)]
        rates: RateArgs,

        /// First foreign rate (%)
        #[arg(long, allow_hyphen_values = true)]
        from: f64,

        /// Last foreign rate (%)
        #[arg(long, allow_hyphen_values = true)]
        to: f64,

        /// Number of grid points
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Output file for the curve (CSV/JSON)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Show version and pricing constants
    Info,
}

/// Rate inputs; unset values come from the config file
#[derive(clap::Args, Debug, Clone, Default)]
struct RateArgs {
    /// Spot rate (foreign units per domestic unit)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    spot: Option<f64>,

    /// Domestic annual rate (%)
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    domestic: Option<f64>,

    /// Foreign annual rate (%)
    #[arg(short = 'f', long, allow_hyphen_values = true)]
    foreign: Option<f64>,
}

impl RateArgs {
    fn resolve(&self, config: &Config) -> RateInputs {
        RateInputs::new(
            self.spot.unwrap_or(config.spot_rate),
            self.domestic.unwrap_or(config.domestic_rate),
            self.foreign.unwrap_or(config.foreign_rate),
        )
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Config {
    #[serde(default = "default_spot_rate")]
    spot_rate: f64,
    #[serde(default = "default_domestic_rate")]
    domestic_rate: f64,
    #[serde(default = "default_foreign_rate")]
    foreign_rate: f64,
    #[serde(default = "default_domestic_currency")]
    domestic_currency: String,
    #[serde(default = "default_foreign_currency")]
    foreign_currency: String,
    #[serde(default = "default_steps")]
    steps: usize,
}

fn default_spot_rate() -> f64 {
    RateInputs::default().spot_rate
}

fn default_domestic_rate() -> f64 {
    RateInputs::default().domestic_rate
}

fn default_foreign_rate() -> f64 {
    RateInputs::default().foreign_rate
}

fn default_domestic_currency() -> String {
    CurrencyPair::default().domestic.to_string()
}

fn default_foreign_currency() -> String {
    CurrencyPair::default().foreign.to_string()
}

fn default_steps() -> usize {
    11
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spot_rate: default_spot_rate(),
            domestic_rate: default_domestic_rate(),
            foreign_rate: default_foreign_rate(),
            domestic_currency: default_domestic_currency(),
            foreign_currency: default_foreign_currency(),
            steps: default_steps(),
        }
    }
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };
        let Some(path) = path else {
            return Config::default();
        };

        match Self::read(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {:#}", "Warning:".yellow(), e);
                Config::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| CipError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Currency pair used to label quotes; unknown codes fall back to the default pair
    fn pair(&self) -> CurrencyPair {
        match (
            self.domestic_currency.parse::<Currency>(),
            self.foreign_currency.parse::<Currency>(),
        ) {
            (Ok(domestic), Ok(foreign)) => CurrencyPair::new(domestic, foreign),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("{}; using {}", e, CurrencyPair::default());
                CurrencyPair::default()
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rusty-cip").join("config.toml"))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-cip".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("Pair: {}", config.pair().to_string().dimmed());
    }

    let result = match cli.command {
        Commands::Price { rates, output } => {
            run_price(&rates.resolve(&config), output.as_deref(), &config)
        }
        Commands::Validate { rates } => run_validate(&rates.resolve(&config)),
        Commands::Sweep {
            rates,
            from,
            to,
            steps,
            output,
        } => run_sweep(
            &rates.resolve(&config),
            from,
            to,
            steps.unwrap_or(config.steps),
            output.as_deref(),
        ),
        Commands::Info => show_info(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn print_errors(errors: &ValidationErrors) {
    println!("{}", "Invalid inputs".red().bold());
    for (field, message) in errors.iter() {
        println!("  {:<14} {}", format!("{}:", field).bold(), message);
    }
}

fn run_price(inputs: &RateInputs, output: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let evaluation = evaluate(inputs);

    let result = match &evaluation {
        Evaluation::Rejected { errors } => {
            print_errors(errors);
            // rejected inputs are only saved as JSON; CSV holds chart rows
            if let Some(path) = output.filter(|p| extension(p) == "json") {
                write_evaluation(&evaluation, path)?;
            }
            bail!("{} field(s) rejected", errors.len());
        }
        Evaluation::Priced { .. } => match evaluation.displayable() {
            Some(result) => result,
            None => bail!("inputs are outside the pricing domain"),
        },
    };

    if let Some(path) = output {
        write_evaluation(&evaluation, path)?;
    }

    let pair = config.pair();
    println!("{}", format!("Forward {}", pair).green().bold());
    println!("{}", "==================".green());
    println!("  Spot Rate:        {:.6} {}", result.spot_rate, pair.quote_unit());
    println!(
        "  Forward Rate:     {}",
        format!("{:.6} {}", result.forward_rate, pair.quote_unit())
            .bright_green()
            .bold()
    );
    println!(
        "  Forward Points:   {:+.2} pips ({:+.4}%)",
        result.forward_points_pips(),
        result.forward_premium_pct()
    );
    println!();
    println!("{}", "Strategies".cyan().bold());
    println!(
        "  Domestic:         {}{:.2}",
        pair.domestic.symbol(),
        result.domestic_ending_value
    );
    println!(
        "  Foreign:          {}{:.2} -> {}{:.2}",
        pair.foreign.symbol(),
        result.foreign_ending_value,
        pair.domestic.symbol(),
        result.domestic_equivalent
    );
    println!("  Difference:       {:.2e}", result.arbitrage_diff);
    if !result.no_arbitrage {
        println!(
            "{} strategies differ by more than {}",
            "Warning:".yellow(),
            ARBITRAGE_TOLERANCE
        );
    }
    println!();
    println!("{}", "Chart".cyan().bold());
    for point in &result.chart_data {
        println!(
            "  {:<4} {:<13} {:.6}",
            point.label, point.kind, point.exchange_rate
        );
    }

    if let Some(path) = output {
        println!();
        println!("{} Results saved to: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn write_evaluation(evaluation: &Evaluation, path: &Path) -> rusty_cip::error::Result<()> {
    match extension(path) {
        "csv" => {
            let Some(result) = evaluation.displayable() else {
                return Err(CipError::ConfigError(format!(
                    "no chart data to write to {}",
                    path.display()
                )));
            };
            let mut wtr = csv::Writer::from_path(path)?;
            for point in &result.chart_data {
                wtr.serialize(point)?;
            }
            wtr.flush()?;
        }
        "json" => fs::write(path, serde_json::to_string_pretty(evaluation)?)?,
        other => {
            log::warn!("Unknown output format '{}', writing JSON", other);
            fs::write(path, serde_json::to_string_pretty(evaluation)?)?;
        }
    }
    Ok(())
}

fn run_validate(inputs: &RateInputs) -> anyhow::Result<()> {
    let errors = validate(inputs);
    if errors.is_empty() {
        println!("{} inputs accepted", "✓".green().bold());
        return Ok(());
    }
    print_errors(&errors);
    bail!("{} field(s) rejected", errors.len())
}

fn run_sweep(
    base: &RateInputs,
    from: f64,
    to: f64,
    steps: usize,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    if steps > MAX_SWEEP_STEPS {
        return Err(CipError::ConfigError(format!(
            "sweep of {} steps exceeds the limit of {}",
            steps, MAX_SWEEP_STEPS
        ))
        .into());
    }
    let points = sweep_foreign_rate(base, from, to, steps);
    if points.is_empty() {
        bail!("no valid grid points between {}% and {}%", from, to);
    }

    println!("{}", "Forward curve".cyan().bold());
    println!("  {:>10}  {:>12}", "foreign %", "forward");
    for point in &points {
        println!("  {:>10.4}  {:>12.6}", point.rate_pct, point.forward_rate);
    }

    if let Some(path) = output {
        write_sweep(&points, path)?;
        println!("{} Curve saved to: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn write_sweep(points: &[SweepPoint], path: &Path) -> rusty_cip::error::Result<()> {
    if extension(path) == "json" {
        fs::write(path, serde_json::to_string_pretty(points)?)?;
    } else {
        let mut wtr = csv::Writer::from_path(path)?;
        for point in points {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
    }
    Ok(())
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|s| s.to_str()).unwrap_or("json")
}

fn show_info(config: &Config) -> anyhow::Result<()> {
    println!("{}", "rusty-cip".cyan().bold());
    println!("  {} {}", "Version:".bold(), env!("CARGO_PKG_VERSION"));
    println!("  {} {}", "Pair:".bold(), config.pair());
    println!();
    println!("{}", "Constants".cyan().bold());
    println!("  Notional:            {}", INITIAL_INVESTMENT);
    println!("  Arbitrage tolerance: {}", ARBITRAGE_TOLERANCE);
    println!("  Spot rate:           (0, {}]", MAX_SPOT_RATE);
    println!("  Interest rates:      ({}%, {}%]", MIN_RATE_PCT, MAX_RATE_PCT);
    Ok(())
}
