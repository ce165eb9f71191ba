use thiserror::Error;

use crate::{CellCount, Coord, GamePhase};

/// Rejected board parameters, one variant per rule in the order they are checked.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgumentsError {
    #[error("Board must have more than 5 rows, got {0}")]
    TooFewRows(Coord),
    #[error("Board must have more than 5 columns, got {0}")]
    TooFewCols(Coord),
    #[error("Board must have at least one mine")]
    NoMines,
    #[error("Board of {rows}x{cols} has more cells than can be counted")]
    BoardTooLarge { rows: Coord, cols: Coord },
    #[error("Too many mines, requested {mine_count} but the board only has {capacity} cells")]
    TooManyMines {
        mine_count: CellCount,
        capacity: CellCount,
    },
}

/// A phase change that could not complete.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Failed to transfer to the {target} phase")]
pub struct StateTransferError {
    pub target: GamePhase,
    #[source]
    pub cause: ArgumentsError,
}

pub type Result<T, E = ArgumentsError> = core::result::Result<T, E>;
