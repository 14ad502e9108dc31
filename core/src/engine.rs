use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::generator::draw_target;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Found,
}

impl GamePhase {
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Playing
    }
}

/// One round: where the target hides, which boxes were faded, and when the first tap happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    config: BoardConfig,
    target: CellIndex,
    board: Array2<BoxCell>,
    started_at: Option<Millis>,
    found_at: Option<Millis>,
    faded_count: CellCount,
    phase: GamePhase,
}

impl SessionState {
    /// Fresh round with a known target.
    pub fn new(config: BoardConfig, target: CellIndex) -> Result<Self> {
        let target = config.validate_cell(target)?;
        Ok(Self::new_unchecked(config, target))
    }

    pub(crate) fn new_unchecked(config: BoardConfig, target: CellIndex) -> Self {
        Self {
            config,
            target,
            board: Array2::default(config.size.to_nd_index()),
            started_at: None,
            found_at: None,
            faded_count: 0,
            phase: Default::default(),
        }
    }

    /// Restores `initial_target` when given, otherwise draws one.
    pub fn start<G: TargetGenerator + ?Sized>(
        config: BoardConfig,
        initial_target: Option<CellIndex>,
        generator: &mut G,
    ) -> Result<Self> {
        match initial_target {
            Some(target) => {
                log::debug!("restoring round with target {}", target);
                Self::new(config, target)
            }
            None => Ok(Self::new_unchecked(config, draw_target(generator, config))),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_found(&self) -> bool {
        self.phase.is_found()
    }

    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    pub fn found_at(&self) -> Option<Millis> {
        self.found_at
    }

    pub fn faded_count(&self) -> CellCount {
        self.faded_count
    }

    pub fn cell_at(&self, cell: CellIndex) -> Result<BoxCell> {
        let cell = self.config.validate_cell(cell)?;
        Ok(self.board[self.config.coords_of(cell).to_nd_index()])
    }

    /// Only meaningful once found; while playing the target stays hidden.
    pub fn found_target(&self) -> Option<CellIndex> {
        self.is_found().then_some(self.target)
    }

    /// The target, for persisting across a reload.
    pub fn snapshot(&self) -> CellIndex {
        self.target
    }

    /// Time from the first tap to the winning tap, once found.
    pub fn elapsed(&self) -> Option<Elapsed> {
        Some(Elapsed::between(self.started_at?, self.found_at?))
    }

    pub fn reveal(&mut self, cell: CellIndex, now: Millis) -> Result<RevealOutcome> {
        let cell = self.config.validate_cell(cell)?;

        if self.phase.is_found() {
            log::trace!("tap on {} ignored, target already found", cell);
            return Ok(RevealOutcome::NoChange);
        }

        let started_at = *self.started_at.get_or_insert(now);

        if cell == self.target {
            self.phase = GamePhase::Found;
            self.found_at = Some(now);
            let elapsed = Elapsed::between(started_at, now);
            log::debug!("target {} found after {:?}", cell, elapsed.duration());
            return Ok(RevealOutcome::Found { elapsed });
        }

        let coords = self.config.coords_of(cell).to_nd_index();
        Ok(match self.board[coords] {
            BoxCell::Covered => {
                self.board[coords] = BoxCell::Faded;
                self.faded_count += 1;
                RevealOutcome::Missed
            }
            BoxCell::Faded => RevealOutcome::NoChange,
        })
    }

    /// Starts the next round on the same board with a fresh target.
    pub fn reset<G: TargetGenerator + ?Sized>(&mut self, generator: &mut G) {
        let target = draw_target(generator, self.config);
        *self = Self::new_unchecked(self.config, target);
        log::debug!("round reset");
    }
}
