//! Compound Growth CLI
//!
//! Command-line front end: takes the five calculator inputs as text, gates
//! them, runs the projection and prints the summary (plus optional table,
//! JSON report, CSV export or frequency comparison).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use compound_growth::display::{breakdown_table, format_axis_label, CurrencyFormatter, VndFormatter};
use compound_growth::params::load_scenarios;
use compound_growth::projection::write_breakdown_csv;
use compound_growth::{
    check_readiness, project, CompoundFrequency, GateConfig, ProjectionReport, RawParameters, Readiness,
    ScenarioRunner,
};

/// Exit status when the inputs are incomplete or invalid
const NOT_READY_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "compound_growth", version, about = "Project compound growth of an investment")]
struct Args {
    /// Initial investment, e.g. "100.000.000 ₫"
    #[arg(long, short = 'p', default_value = "", allow_hyphen_values = true)]
    initial: String,

    /// Monthly contribution, e.g. "5.000.000"
    #[arg(long, short = 'c', default_value = "", allow_hyphen_values = true)]
    monthly: String,

    /// Annual interest rate in percent, e.g. "7,2 %"
    #[arg(long, short = 'r', default_value = "", allow_hyphen_values = true)]
    rate: String,

    /// Whole years to project
    #[arg(long, short = 'y', default_value = "", allow_hyphen_values = true)]
    years: String,

    /// daily, monthly, quarterly or annually (defaults to GROWTH_DEFAULT_FREQUENCY or monthly)
    #[arg(long, short = 'f')]
    frequency: Option<CompoundFrequency>,

    /// Print the year-by-year table
    #[arg(long)]
    breakdown: bool,

    /// Print the full JSON report instead of the summary
    #[arg(long)]
    json: bool,

    /// Write the yearly breakdown to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Also project under every compounding frequency
    #[arg(long)]
    compare_frequencies: bool,

    /// Project every row of a scenario CSV instead of a single input
    #[arg(long, value_name = "PATH")]
    batch: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let config = GateConfig::from_env();

    if let Some(path) = &args.batch {
        run_batch(path, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let raw = RawParameters::from_text(
        &args.initial,
        &args.monthly,
        &args.rate,
        &args.years,
        args.frequency.unwrap_or(config.default_frequency),
    );

    let params = match check_readiness(&raw, &config) {
        Readiness::Ready(params) => params,
        Readiness::NotReady(reasons) => {
            eprintln!("Not ready to calculate:");
            for reason in &reasons {
                eprintln!("  - {}", reason);
            }
            return Ok(ExitCode::from(NOT_READY_EXIT));
        }
    };

    let result = project(&params);
    let formatter = VndFormatter;

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_breakdown_csv(BufWriter::new(file), &result)
            .with_context(|| format!("writing breakdown to {}", path.display()))?;
        log::info!("breakdown written to {}", path.display());
    }

    if args.json {
        let report = ProjectionReport::new(params, result);
        println!("{}", report.to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Compound Growth Projection");
    println!("==========================\n");
    println!("  Initial investment:   {}", formatter.format_currency(params.initial_investment));
    println!("  Monthly contribution: {}", formatter.format_currency(params.monthly_contribution));
    println!("  Annual rate:          {} %", params.annual_interest_rate);
    println!("  Years:                {}", params.years);
    println!("  Compounding:          {}", params.compound_frequency);
    println!();
    println!("  Future value:         {}", formatter.format_currency(result.future_value));
    println!("  Total contributions:  {}", formatter.format_currency(result.total_contributions));
    println!("  Total interest:       {}", formatter.format_currency(result.total_interest));

    if args.breakdown {
        println!();
        print!("{}", breakdown_table(&result, &formatter));
    }

    if args.compare_frequencies {
        println!("\nBy compounding frequency:");
        for (freq, alt) in ScenarioRunner::new().compare_frequencies(&params) {
            println!(
                "  {:<10} {:>24}  ({})",
                freq.as_str(),
                formatter.format_currency(alt.future_value),
                format_axis_label(alt.future_value)
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_batch(path: &Path, config: &GateConfig) -> Result<()> {
    let rows = load_scenarios(path, config).with_context(|| format!("loading scenarios from {}", path.display()))?;
    let formatter = VndFormatter;

    for row in rows.iter().filter(|r| !r.readiness.is_ready()) {
        let reasons: Vec<String> = row.readiness.reasons().iter().map(|r| r.to_string()).collect();
        println!("{:<20} skipped: {}", row.label, reasons.join("; "));
    }

    let outcomes = ScenarioRunner::new().run_rows(&rows);
    println!("{:<20} {:>10} {:>24} {:>24}", "Scenario", "Freq", "Future value", "Interest");
    println!("{}", "-".repeat(81));
    for outcome in &outcomes {
        println!(
            "{:<20} {:>10} {:>24} {:>24}",
            outcome.label,
            outcome.parameters.compound_frequency.as_str(),
            formatter.format_currency(outcome.result.future_value),
            formatter.format_currency(outcome.result.total_interest),
        );
    }

    Ok(())
}
