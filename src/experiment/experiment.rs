use log::debug;
use rand::Rng;

use crate::error::HatError;
use crate::experiment::Estimate;
use crate::hat::Hat;
use crate::metrics::TrialRecord;
use crate::multiset::{Multiset, tally};

/// Monte Carlo estimate of the probability that drawing `draws` balls from
/// `hat` yields at least the counts in `expected`.
///
/// `hat` is used as a template and is never modified.
pub fn run_experiment(
    hat: &Hat,
    expected: &Multiset,
    draws: usize,
    trials: usize,
) -> Result<f64, HatError> {
    let experiment = Experiment::new(hat, expected, draws, trials)?;
    Ok(experiment.run(&mut rand::rng(), None).probability())
}

/// A validated experiment setup.
#[derive(Clone, Copy, Debug)]
pub struct Experiment<'a> {
    hat: &'a Hat,
    expected: &'a Multiset,
    draws: usize,
    trials: usize,
}

impl<'a> Experiment<'a> {
    pub fn new(
        hat: &'a Hat,
        expected: &'a Multiset,
        draws: usize,
        trials: usize,
    ) -> Result<Self, HatError> {
        if trials == 0 {
            return Err(HatError::InvalidTrialParameters(
                "number of trials must be positive".to_string(),
            ));
        }

        Ok(Experiment { hat, expected, draws, trials })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// One trial: draw from a fresh copy of the hat and check the target.
    pub fn trial<R: Rng>(&self, rng: &mut R) -> bool {
        self.sample(rng).1
    }

    /// Returns the number of balls drawn and whether the target was met.
    fn sample<R: Rng>(&self, rng: &mut R) -> (usize, bool) {
        let drawn = self.hat.clone().draw_with(self.draws, rng);
        (drawn.len(), tally(&drawn).satisfies(self.expected))
    }

    /// Runs every trial sequentially on `rng`.
    pub fn run<R: Rng>(
        &self,
        rng: &mut R,
        trial_data: Option<&mut Vec<TrialRecord>>,
    ) -> Estimate {
        debug!(
            "Running {} trials of {} draws from {}",
            self.trials, self.draws, self.hat
        );

        let estimate = self.run_stream(0, self.trials, rng, trial_data);

        debug!(
            "Finished: {}/{} successes, estimate {:.4}",
            estimate.successes,
            estimate.trials,
            estimate.probability()
        );

        estimate
    }

    /// Runs `trials` trials as stream `worker`, optionally recording each.
    pub(super) fn run_stream<R: Rng>(
        &self,
        worker: usize,
        trials: usize,
        rng: &mut R,
        mut trial_data: Option<&mut Vec<TrialRecord>>,
    ) -> Estimate {
        let mut estimate = Estimate::default();

        for trial in 0..trials {
            let (drawn, success) = self.sample(rng);

            estimate.record(success);

            if let Some(ref mut records) = trial_data {
                records.push(TrialRecord {
                    worker,
                    trial,
                    drawn,
                    success,
                    successes: estimate.successes,
                    estimate: estimate.probability(),
                });
            }
        }

        estimate
    }
}
