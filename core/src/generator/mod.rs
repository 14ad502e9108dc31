use crate::*;
pub use random::*;

mod random;

/// Source of hidden targets, drawn once per round.
pub trait TargetGenerator {
    fn generate(&mut self, config: BoardConfig) -> CellIndex;
}

/// Always hides the target under the same box, clamped to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedTarget(pub CellIndex);

impl TargetGenerator for FixedTarget {
    fn generate(&mut self, config: BoardConfig) -> CellIndex {
        let last = config.total_cells().saturating_sub(1);
        if self.0 > last {
            log::warn!(
                "Fixed target {} does not fit a board of {} cells, using {}",
                self.0,
                config.total_cells(),
                last
            );
        }
        self.0.min(last)
    }
}

/// Draws a target and falls back to the last cell if the generator misbehaves.
pub(crate) fn draw_target<G: TargetGenerator + ?Sized>(
    generator: &mut G,
    config: BoardConfig,
) -> CellIndex {
    let target = generator.generate(config);
    match config.validate_cell(target) {
        Ok(target) => target,
        Err(err) => {
            log::warn!("Generator produced an unusable target: {}", err);
            config.total_cells().saturating_sub(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl TargetGenerator for Broken {
        fn generate(&mut self, _config: BoardConfig) -> CellIndex {
            CellIndex::MAX
        }
    }

    #[test]
    fn fixed_target_is_clamped_to_board() {
        let config = BoardConfig::new((2, 2));

        assert_eq!(FixedTarget(1).generate(config), 1);
        assert_eq!(FixedTarget(9).generate(config), 3);
    }

    #[test]
    fn out_of_range_draw_falls_back_to_last_cell() {
        assert_eq!(draw_target(&mut Broken, BoardConfig::default()), 24);
    }
}
