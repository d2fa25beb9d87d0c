use super::*; // Import Experiment, Estimate, run_experiment
use crate::error::HatError;
use crate::hat::Hat;
use crate::multiset::Multiset;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn setup() -> (Hat, Multiset) {
        (
            "black=6,red=4,green=3".parse().unwrap(),
            "red=2,green=1".parse().unwrap(),
        )
    }

    #[test]
    fn test_zero_trials() {
        let (hat, expected) = setup();

        assert!(matches!(
            Experiment::new(&hat, &expected, 5, 0),
            Err(HatError::InvalidTrialParameters(_))
        ));
        assert!(run_experiment(&hat, &expected, 5, 0).is_err());
    }

    #[test]
    fn test_zero_workers() {
        let (hat, expected) = setup();
        let experiment = Experiment::new(&hat, &expected, 5, 10).unwrap();

        assert!(matches!(
            experiment.run_pooled(1, 0, None),
            Err(HatError::InvalidTrialParameters(_))
        ));
    }

    #[test]
    fn test_full_draw_is_certain() {
        let (hat, expected) = setup();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

        let experiment = Experiment::new(&hat, &expected, 13, 1).unwrap();
        assert_eq!(experiment.run(&mut rng, None).probability(), 1.0);
        assert!(experiment.trial(&mut rng));

        let impossible: Multiset = "red=5".parse().unwrap();
        let experiment = Experiment::new(&hat, &impossible, 13, 1).unwrap();
        assert_eq!(experiment.run(&mut rng, None).probability(), 0.0);

        let unknown: Multiset = "purple=1".parse().unwrap();
        assert_eq!(run_experiment(&hat, &unknown, 13, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_template_untouched() {
        let (hat, expected) = setup();
        run_experiment(&hat, &expected, 5, 100).unwrap();

        assert_eq!(hat.len(), 13);
        assert_eq!(hat.to_string(), "Hat(black=6, red=4, green=3)");
    }

    #[test]
    fn test_estimate_band() {
        // Exact probability is about 0.366
        let (hat, expected) = setup();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

        let experiment = Experiment::new(&hat, &expected, 5, 2_000).unwrap();
        let estimate = experiment.run(&mut rng, None);

        assert_eq!(estimate.trials, 2_000);
        assert!(
            (0.30..=0.45).contains(&estimate.probability()),
            "Estimate out of band: {}",
            estimate.probability()
        );
        assert!(estimate.standard_error() > 0.0 && estimate.standard_error() < 0.02);
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let (hat, expected) = setup();
        let experiment = Experiment::new(&hat, &expected, 5, 500).unwrap();

        let a = experiment.run(&mut Xoshiro256PlusPlus::seed_from_u64(9), None);
        let b = experiment.run(&mut Xoshiro256PlusPlus::seed_from_u64(9), None);

        assert_eq!(a, b);
    }

    #[test]
    fn test_pooled() {
        let (hat, expected) = setup();
        let experiment = Experiment::new(&hat, &expected, 5, 2_000).unwrap();

        let a = experiment.run_pooled(11, 4, None).unwrap();
        let b = experiment.run_pooled(11, 4, None).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.trials, 2_000);
        assert!((0.30..=0.45).contains(&a.probability()), "Estimate out of band: {}", a.probability());
    }

    #[test]
    fn test_pooled_caps_workers() {
        let (hat, expected) = setup();
        let experiment = Experiment::new(&hat, &expected, 13, 3).unwrap();

        let mut records = Vec::new();
        let estimate = experiment.run_pooled(5, 8, Some(&mut records)).unwrap();

        assert_eq!(estimate, Estimate::new(3, 3));
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.trial == 0 && r.drawn == 13 && r.success));

        let workers: Vec<usize> = records.iter().map(|r| r.worker).collect();
        assert_eq!(workers, vec![0, 1, 2]);
    }

    #[test]
    fn test_trial_records() {
        let (hat, expected) = setup();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let experiment = Experiment::new(&hat, &expected, 5, 50).unwrap();

        let mut records = Vec::new();
        let estimate = experiment.run(&mut rng, Some(&mut records));

        assert_eq!(records.len(), 50);
        assert!(records.iter().all(|r| r.worker == 0 && r.drawn == 5));
        assert!(records.iter().enumerate().all(|(i, r)| r.trial == i));

        let last = records.last().unwrap();
        assert_eq!(last.successes, estimate.successes);
        assert_eq!(last.estimate, estimate.probability());
        assert_eq!(
            records.iter().filter(|r| r.success).count(),
            estimate.successes
        );
    }

    #[test]
    fn test_estimate_merge() {
        let mut a = Estimate::default();
        a.record(true);
        a.record(false);
        let b = Estimate::new(1, 2);

        let merged = a.merge(b);
        assert_eq!(merged, Estimate::new(2, 4));
        assert_eq!(merged.probability(), 0.5);
        assert_eq!(Estimate::default().probability(), 0.0);
    }
}
