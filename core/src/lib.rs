extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use phase::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod phase;
mod session;
mod types;

/// Validated board parameters.
///
/// Construct through [`GameConfig::new`] or one of the presets, the fields are kept private so a
/// config in hand always satisfies the board rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mine_count: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, mine_count: CellCount) -> Self {
        Self {
            rows,
            cols,
            mine_count,
        }
    }

    /// Checks, in this order, `rows > 5`, `cols > 5`, `mine_count > 0` and
    /// `mine_count < rows * cols`, failing on the first broken rule. A board whose cell count
    /// does not fit a [`CellCount`] is rejected before the last rule.
    pub fn new(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        if rows <= 5 {
            return Err(ArgumentsError::TooFewRows(rows));
        }
        if cols <= 5 {
            return Err(ArgumentsError::TooFewCols(cols));
        }
        if mine_count == 0 {
            return Err(ArgumentsError::NoMines);
        }
        let capacity = (rows as CellCount)
            .checked_mul(cols as CellCount)
            .ok_or(ArgumentsError::BoardTooLarge { rows, cols })?;
        if mine_count >= capacity {
            return Err(ArgumentsError::TooManyMines {
                mine_count,
                capacity,
            });
        }
        Ok(Self::new_unchecked(rows, cols, mine_count))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_arguments() {
        let config = GameConfig::new(6, 6, 35).unwrap();

        assert_eq!(config.rows(), 6);
        assert_eq!(config.cols(), 6);
        assert_eq!(config.mine_count(), 35);
        assert_eq!(config.total_cells(), 36);
    }

    #[test]
    fn rows_rule_is_checked_first() {
        assert_eq!(GameConfig::new(5, 10, 5), Err(ArgumentsError::TooFewRows(5)));
        assert_eq!(GameConfig::new(-1, 0, 0), Err(ArgumentsError::TooFewRows(-1)));
    }

    #[test]
    fn rules_fail_in_order() {
        assert_eq!(GameConfig::new(6, 5, 0), Err(ArgumentsError::TooFewCols(5)));
        assert_eq!(GameConfig::new(6, 6, 0), Err(ArgumentsError::NoMines));
        assert_eq!(
            GameConfig::new(6, 6, 36),
            Err(ArgumentsError::TooManyMines {
                mine_count: 36,
                capacity: 36
            })
        );
    }

    #[test]
    fn oversized_board_is_rejected() {
        assert_eq!(
            GameConfig::new(70_000, 70_000, 10),
            Err(ArgumentsError::BoardTooLarge {
                rows: 70_000,
                cols: 70_000
            })
        );
        assert!(GameConfig::new(65_536, 65_535, 10).is_ok());
    }

    #[test]
    fn error_messages_name_the_rule() {
        let err = GameConfig::new(6, 4, 3).unwrap_err();

        assert_eq!(err.to_string(), "Board must have more than 5 columns, got 4");
    }

    #[test]
    fn presets_pass_validation() {
        for difficulty in [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Expert] {
            let preset = difficulty.config();
            let checked = GameConfig::new(preset.rows(), preset.cols(), preset.mine_count());
            assert_eq!(checked, Ok(preset));
        }
    }
}
