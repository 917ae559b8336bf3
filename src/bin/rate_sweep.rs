//! Run a rate-sensitivity sweep for an alternative set
//!
//! Outputs one CSV row per (rate, alternative) pair for plotting EUAC
//! curves and finding crossover rates.

use euac_system::alternative::{classroom_example_set, load_alternatives};
use euac_system::sweep::RateSweep;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    let alternatives = match args.get(1) {
        Some(path) => {
            println!("Loading alternatives from {}...", path);
            load_alternatives(Path::new(path)).expect("Failed to load alternatives")
        }
        None => {
            println!("No input file given, using built-in example set");
            classroom_example_set()
        }
    };
    println!("Loaded {} alternatives in {:?}", alternatives.len(), start.elapsed());

    // 0% to 25% in quarter-point steps
    let sweep = RateSweep::new(alternatives);

    println!("Running sweep...");
    let sweep_start = Instant::now();
    let points = sweep
        .run_range(0.0, 0.25, 101)
        .expect("Sweep failed");
    println!("Sweep complete in {:?}", sweep_start.elapsed());

    let output_path = "rate_sweep_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Rate,Name,TotalEUAC,CRF,Rank,IsBest").unwrap();
    for point in &points {
        for (rank, alt) in point.report.ranking.iter().enumerate() {
            writeln!(
                file,
                "{:.4},{},{:.4},{:.8},{},{}",
                point.rate,
                alt.name,
                alt.total_euac,
                alt.capital_recovery_factor,
                rank + 1,
                rank == 0,
            )
            .unwrap();
        }
    }

    println!("Results written to: {}", output_path);

    // Report where the winner changes across the grid
    let mut previous_best: Option<String> = None;
    for point in &points {
        let best = &point.report.best_alternative.name;
        if previous_best.as_deref() != Some(best) {
            println!("  From {:>6.2}%: best is {}", point.rate * 100.0, best);
            previous_best = Some(best.clone());
        }
    }

    println!("Done in {:?}", start.elapsed());
}
