use serde::{Deserialize, Serialize};

/// Adjacent mine count of a cell, `-1` while unknown or when the cell holds a mine.
pub type MineCount = i8;

pub const UNKNOWN_MINE_COUNT: MineCount = -1;

/// Effect of a cell mutation that the owning board must account for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellChange {
    NoChange,
    Revealed,
    Flagged(bool),
}

impl CellChange {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One slot of the board grid.
///
/// Mutators are guarded by the current flags and never fail: a call that would break an
/// invariant is ignored and reported as [`CellChange::NoChange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    revealed: bool,
    mined: bool,
    flagged: bool,
    mine_count: MineCount,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            revealed: false,
            mined: false,
            flagged: false,
            mine_count: UNKNOWN_MINE_COUNT,
        }
    }
}

impl Cell {
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_mined(&self) -> bool {
        self.mined
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn mine_count(&self) -> MineCount {
        self.mine_count
    }

    /// Zero adjacent mines, opening it floods its neighborhood.
    pub const fn is_safe(&self) -> bool {
        self.mine_count == 0
    }

    /// Numbered cell, a candidate for chord reveal.
    pub const fn is_unsafe(&self) -> bool {
        self.mine_count > 0
    }

    /// Revealing is one-way and blocked by a flag.
    pub(crate) fn set_revealed(&mut self, revealed: bool) -> CellChange {
        if revealed && !self.revealed && !self.flagged {
            self.revealed = true;
            CellChange::Revealed
        } else {
            CellChange::NoChange
        }
    }

    /// Mines are only ever added, and a mined cell carries no count.
    pub(crate) fn set_mined(&mut self, mined: bool) {
        if mined && !self.mined {
            self.mined = true;
            self.mine_count = UNKNOWN_MINE_COUNT;
        }
    }

    pub(crate) fn set_mine_count(&mut self, mine_count: MineCount) {
        if (UNKNOWN_MINE_COUNT..=8).contains(&mine_count) {
            self.mine_count = mine_count;
        }
    }

    /// Flag state is frozen once the cell is revealed.
    pub(crate) fn set_flagged(&mut self, flagged: bool) -> CellChange {
        if self.revealed || self.flagged == flagged {
            return CellChange::NoChange;
        }
        self.flagged = flagged;
        CellChange::Flagged(flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut cell = Cell::default();

        assert_eq!(cell.set_revealed(true), CellChange::Revealed);
        assert_eq!(cell.set_revealed(true), CellChange::NoChange);
        assert_eq!(cell.set_revealed(false), CellChange::NoChange);
        assert!(cell.is_revealed());
    }

    #[test]
    fn flag_blocks_reveal() {
        let mut cell = Cell::default();
        cell.set_flagged(true);

        assert_eq!(cell.set_revealed(true), CellChange::NoChange);
        assert!(!cell.is_revealed());

        cell.set_flagged(false);
        assert_eq!(cell.set_revealed(true), CellChange::Revealed);
    }

    #[test]
    fn flag_is_frozen_after_reveal() {
        let mut cell = Cell::default();
        cell.set_revealed(true);

        assert_eq!(cell.set_flagged(true), CellChange::NoChange);
        assert!(!cell.is_flagged());
    }

    #[test]
    fn flag_reports_only_actual_changes() {
        let mut cell = Cell::default();

        assert_eq!(cell.set_flagged(false), CellChange::NoChange);
        assert_eq!(cell.set_flagged(true), CellChange::Flagged(true));
        assert_eq!(cell.set_flagged(true), CellChange::NoChange);
        assert_eq!(cell.set_flagged(false), CellChange::Flagged(false));
    }

    #[test]
    fn mining_clears_count() {
        let mut cell = Cell::default();
        cell.set_mine_count(3);

        cell.set_mined(true);

        assert!(cell.is_mined());
        assert_eq!(cell.mine_count(), UNKNOWN_MINE_COUNT);
        assert!(!cell.is_safe());
        assert!(!cell.is_unsafe());
    }

    #[test]
    fn out_of_range_counts_are_ignored() {
        let mut cell = Cell::default();
        cell.set_mine_count(4);

        cell.set_mine_count(9);
        cell.set_mine_count(-2);

        assert_eq!(cell.mine_count(), 4);
        assert!(cell.is_unsafe());
    }

    #[test]
    fn zero_count_is_safe() {
        let mut cell = Cell::default();
        assert!(!cell.is_safe());

        cell.set_mine_count(0);

        assert!(cell.is_safe());
        assert!(!cell.is_unsafe());
    }
}
