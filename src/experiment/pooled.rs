use std::panic;
use std::thread;

use log::debug;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::HatError;
use crate::experiment::{Estimate, Experiment};
use crate::metrics::TrialRecord;

impl Experiment<'_> {
    /// Splits the trials over `workers` threads.
    ///
    /// Every worker owns its own generator: one Xoshiro256++ stream per
    /// worker, derived from `seed` with `jump()`, so the result only depends
    /// on `(seed, workers)`. Workers beyond the number of trials are dropped.
    /// Records are returned grouped by worker.
    pub fn run_pooled(
        &self,
        seed: u64,
        workers: usize,
        trial_data: Option<&mut Vec<TrialRecord>>,
    ) -> Result<Estimate, HatError> {
        if workers == 0 {
            return Err(HatError::InvalidTrialParameters(
                "number of workers must be positive".to_string(),
            ));
        }

        let workers = workers.min(self.trials());
        let record = trial_data.is_some();

        let mut stream = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut streams = Vec::with_capacity(workers);
        for _ in 0..workers {
            streams.push(stream.clone());
            stream.jump();
        }

        let shares = (0..workers).map(|worker| {
            self.trials() / workers + usize::from(worker < self.trials() % workers)
        });

        debug!(
            "Running {} trials on {} workers (seed {})",
            self.trials(),
            workers,
            seed
        );

        let outcomes: Vec<(Estimate, Vec<TrialRecord>)> = thread::scope(|scope| {
            let handles: Vec<_> = shares
                .zip(streams)
                .enumerate()
                .map(|(worker, (share, mut rng))| {
                    scope.spawn(move || {
                        let mut records = Vec::with_capacity(if record { share } else { 0 });
                        let estimate = self.run_stream(
                            worker,
                            share,
                            &mut rng,
                            record.then_some(&mut records),
                        );
                        (estimate, records)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        });

        let mut estimate = Estimate::default();
        let mut collected = Vec::new();

        for (partial, records) in outcomes {
            estimate = estimate.merge(partial);
            collected.push(records);
        }

        if let Some(trial_data) = trial_data {
            trial_data.extend(collected.into_iter().flatten());
        }

        debug!(
            "Finished: {}/{} successes, estimate {:.4}",
            estimate.successes,
            estimate.trials,
            estimate.probability()
        );

        Ok(estimate)
    }
}
