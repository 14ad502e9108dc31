#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use audio::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod audio;
mod clock;
mod engine;
mod error;
mod game;
mod generator;
mod tile;
mod types;

/// Grid shape of a round, 5 x 5 unless configured otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);

    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((columns, rows): Coord2) -> Self {
        let columns = columns.clamp(1, Coord::MAX);
        let rows = rows.clamp(1, Coord::MAX);
        Self::new_unchecked((columns, rows))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn columns(&self) -> Coord {
        self.size.0
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub fn validate_cell(&self, cell: CellIndex) -> Result<CellIndex> {
        if cell < self.total_cells() {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell(cell))
        }
    }

    /// Maps a cell index to `(x, y)`, filling rows left to right.
    pub const fn coords_of(&self, cell: CellIndex) -> Coord2 {
        let columns = self.size.0 as CellIndex;
        ((cell % columns) as Coord, (cell / columns) as Coord)
    }

    pub const fn index_of(&self, (x, y): Coord2) -> CellIndex {
        (y as CellIndex) * (self.size.0 as CellIndex) + (x as CellIndex)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = CellIndex> + use<> {
        0..self.total_cells()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE)
    }
}

/// Time between the first tap of a round and the tap that found the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed(Duration);

impl Elapsed {
    pub const ZERO: Self = Self(Duration::ZERO);

    pub fn between(started_at: Millis, ended_at: Millis) -> Self {
        Self(Duration::from_millis(ended_at.saturating_sub(started_at)))
    }

    pub const fn duration(self) -> Duration {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Missed,
    Found { elapsed: Elapsed },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Missed => true,
            Found { .. } => true,
        }
    }

    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
