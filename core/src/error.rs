use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
}

pub type Result<T> = core::result::Result<T, GameError>;
