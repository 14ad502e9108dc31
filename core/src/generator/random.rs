use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform draw over every box on the board, reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomTargetGenerator {
    rng: SmallRng,
}

impl RandomTargetGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetGenerator for RandomTargetGenerator {
    fn generate(&mut self, config: BoardConfig) -> CellIndex {
        let target = self.rng.random_range(0..config.total_cells());
        log::trace!("drew target {} of {}", target, config.total_cells());
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_draws_same_targets() {
        let config = BoardConfig::default();
        let mut a = RandomTargetGenerator::new(42);
        let mut b = RandomTargetGenerator::new(42);

        for _ in 0..32 {
            assert_eq!(a.generate(config), b.generate(config));
        }
    }

    #[test]
    fn draws_cover_every_cell_uniformly() {
        const DRAWS_PER_CELL: usize = 400;

        let config = BoardConfig::default();
        let cells = usize::from(config.total_cells());
        let mut generator = RandomTargetGenerator::new(7);
        let mut counts = alloc::vec![0usize; cells];

        for _ in 0..cells * DRAWS_PER_CELL {
            let target = generator.generate(config);
            assert!(target < config.total_cells());
            counts[usize::from(target)] += 1;
        }

        // Chi-squared with 24 degrees of freedom, p = 0.001 critical value is ~51.2.
        let expected = DRAWS_PER_CELL as f64;
        let chi_squared: f64 = counts
            .iter()
            .map(|&count| {
                let delta = count as f64 - expected;
                delta * delta / expected
            })
            .sum();
        assert!(chi_squared < 51.2, "chi squared too high: {chi_squared}");
        assert!(counts.iter().all(|&count| count > 0));
    }

    #[test]
    fn single_cell_board_always_hides_target_at_zero() {
        let config = BoardConfig::new((1, 1));
        let mut generator = RandomTargetGenerator::new(1);

        assert!((0..16).all(|_| generator.generate(config) == 0));
    }
}
