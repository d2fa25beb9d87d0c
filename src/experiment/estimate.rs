/// Outcome of a batch of trials.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Estimate {
    pub successes: usize,
    pub trials: usize,
}

impl Estimate {
    pub fn new(successes: usize, trials: usize) -> Self {
        debug_assert!(successes <= trials, "More successes than trials");
        Estimate { successes, trials }
    }

    /// Fraction of successful trials, 0.0 when no trial has run.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials as f64
    }

    /// Binomial standard error of [`Estimate::probability`].
    pub fn standard_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.probability();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    pub fn record(&mut self, success: bool) {
        self.trials += 1;
        if success {
            self.successes += 1;
        }
    }

    pub fn merge(self, other: Estimate) -> Estimate {
        Estimate {
            successes: self.successes + other.successes,
            trials: self.trials + other.trials,
        }
    }
}
