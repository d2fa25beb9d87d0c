use std::error::Error;
use std::time::Instant;

use hatdraw::Hat;
use hatdraw::experiment::Experiment;
use hatdraw::metrics;
use hatdraw::utils::{Args, Parser, metrics_path};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let hat = Hat::new(args.hat.clone());
    let experiment = Experiment::new(&hat, &args.expect, args.draws, args.trials)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);

    println!("------");
    println!("Hat: {}", hat);
    println!("Expected: {}", args.expect);
    println!("Draws per trial: {}", args.draws);
    println!("Trials per run: {} on {} worker(s)", args.trials, args.workers);
    println!("Base seed: {}", base_seed);

    let mut results = Vec::with_capacity(args.runs as usize);

    let start_time = Instant::now();

    for run in 0..args.runs {
        let seed = base_seed.wrapping_add(run as u64);
        let mut trial_data = args.metrics.as_ref().map(|_| Vec::with_capacity(args.trials));

        let estimate = experiment.run_pooled(seed, args.workers, trial_data.as_mut())?;

        println!(
            "Run {}/{}: {:.4} ± {:.4} ({}/{})",
            run + 1,
            args.runs,
            estimate.probability(),
            estimate.standard_error(),
            estimate.successes,
            estimate.trials
        );

        if let (Some(dir), Some(records)) = (&args.metrics, &trial_data) {
            metrics::serialize_to_parquet(records, metrics_path(dir, run)?)?;
        }

        results.push(estimate.probability());
    }

    let duration = start_time.elapsed();

    println!("Time computing: {:?}", duration / args.runs.max(1));

    if !results.is_empty() {
        let average = results.iter().sum::<f64>() / results.len() as f64;
        let min = results.iter().copied().fold(f64::INFINITY, f64::min);
        let max = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        println!("Average estimate: {:.4}", average);
        println!("Spread: {:.4} - {:.4}", min, max);
    }

    Ok(())
}
