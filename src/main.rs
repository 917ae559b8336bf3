//! EUAC System CLI
//!
//! Compares investment alternatives by equivalent uniform annual cost and
//! prints the ranking, or sweeps a set of candidate rates.

use anyhow::Context;
use clap::Parser;
use euac_system::alternative::{classroom_example_set, load_alternatives};
use euac_system::engine::{compare_alternatives, ComparisonReport};
use euac_system::sweep::RateSweep;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "euac_system", version, about = "Rank investment alternatives by EUAC")]
struct Args {
    /// CSV file of alternatives (Name,Investment,UsefulLife,SalvageValue,
    /// OperatingCost,Revenue); uses the built-in example set when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Discount rate in percent (5 = 5% per period)
    #[arg(short, long, default_value_t = 5.0)]
    rate: f64,

    /// Sweep these rates (percent, comma separated) instead of a single run
    #[arg(long, value_delimiter = ',')]
    sweep: Option<Vec<f64>>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the ranking to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let alternatives = match &args.input {
        Some(path) => load_alternatives(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load alternatives from {}", path.display()))?,
        None => {
            println!("No input file given, using built-in example set\n");
            classroom_example_set()
        }
    };

    if let Some(sweep_pcts) = &args.sweep {
        let rates: Vec<f64> = sweep_pcts.iter().map(|p| p / 100.0).collect();
        let points = RateSweep::new(alternatives).run(&rates)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&points)?);
            return Ok(());
        }

        println!("Rate sweep ({} rates):", points.len());
        println!("{:>8} {:>20} {:>14} {:>12}", "Rate", "Best Alternative", "Best EUAC", "Cost Gap");
        println!("{}", "-".repeat(58));
        for point in &points {
            println!(
                "{:>7.2}% {:>20} {:>14.2} {:>12.2}",
                point.rate * 100.0,
                point.report.best_alternative.name,
                point.report.best_alternative.total_euac,
                point.report.summary.cost_gap,
            );
        }
        return Ok(());
    }

    let rate = args.rate / 100.0;
    let report = compare_alternatives(&alternatives, rate)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = &args.output {
        write_ranking_csv(&report, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nRanking written to: {}", path.display());
    }

    Ok(())
}

fn print_report(report: &ComparisonReport) {
    println!("EUAC System v0.1.0");
    println!("==================\n");

    println!("Best alternative: {}", report.best_alternative.name);
    println!("  EUAC: {:.4}\n", report.best_alternative.total_euac);

    println!("Summary:");
    println!("  Interest rate: {:.2}%", report.summary.interest_rate * 100.0);
    println!("  Alternatives evaluated: {}", report.summary.alternative_count);
    if report.summary.cost_gap > 0.0 {
        println!("  Cost gap to runner-up: {:.2}", report.summary.cost_gap);
    }

    println!("\nRanking:");
    println!("{:>4} {:>20} {:>14} {:>10}", "Pos", "Alternative", "Total EUAC", "CRF");
    println!("{}", "-".repeat(52));
    for (pos, alt) in report.ranking.iter().enumerate() {
        println!(
            "{:>4} {:>20} {:>14.2} {:>10.4}",
            pos + 1,
            alt.name,
            alt.total_euac,
            alt.capital_recovery_factor,
        );
    }

    println!("\nDetailed breakdown:");
    for alt in &report.results {
        println!("\n  {}", alt.name);
        println!("    Investment:            {:>14.2}", alt.investment);
        println!("    Useful life:           {:>14} periods", alt.useful_life);
        println!("    Operating cost:        {:>14.2}", alt.operating_cost);
        println!("    Revenue:               {:>14.2}", alt.revenue);
        println!("    Salvage value:         {:>14.2}", alt.salvage_value);
        println!("    Capital recovery:      {:>14.6}", alt.capital_recovery_factor);
        println!("    Annualized investment: {:>14.2}", alt.annualized_investment);
        println!("    Annualized salvage:    {:>14.2}", alt.annualized_salvage);
        println!("    TOTAL EUAC:            {:>14.2}", alt.total_euac);
    }
}

fn write_ranking_csv(report: &ComparisonReport, path: &std::path::Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "Position,Name,Investment,UsefulLife,SalvageValue,OperatingCost,Revenue,CRF,AnnualizedInvestment,AnnualizedSalvage,TotalEUAC"
    )?;
    for (pos, alt) in report.ranking.iter().enumerate() {
        writeln!(
            file,
            "{},{},{:.2},{},{:.2},{:.2},{:.2},{:.8},{:.2},{:.2},{:.2}",
            pos + 1,
            alt.name,
            alt.investment,
            alt.useful_life,
            alt.salvage_value,
            alt.operating_cost,
            alt.revenue,
            alt.capital_recovery_factor,
            alt.annualized_investment,
            alt.annualized_salvage,
            alt.total_euac,
        )?;
    }
    Ok(())
}
