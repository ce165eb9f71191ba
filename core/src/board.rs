use alloc::collections::VecDeque;
use core::num::Saturating;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - None -> Fail
/// - None -> Success
///
/// Only a layout reset brings a board back to `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Round still open
    #[default]
    None,
    /// A mine was revealed
    Fail,
    /// Every safe cell was revealed
    Success,
}

impl BoardStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Fail | Self::Success)
    }
}

/// Grid of cells plus the counters derived from it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    unrevealed_count: Saturating<CellCount>,
    flag_count: Saturating<CellCount>,
    status: BoardStatus,
    content_ready: bool,
}

impl Board {
    /// Validating factory, see [`GameConfig::new`] for the rules.
    pub fn create(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        GameConfig::new(rows, cols, mine_count).map(Self::new)
    }

    /// A board with no layout yet, call [`Board::init_layout`] before use.
    pub fn new(config: GameConfig) -> Self {
        log::debug!(
            "New {}x{} board with {} mines",
            config.rows(),
            config.cols(),
            config.mine_count()
        );
        Self {
            config,
            grid: Array2::default((0, 0)),
            unrevealed_count: Saturating(0),
            flag_count: Saturating(0),
            status: BoardStatus::None,
            content_ready: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mine_count()
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.unrevealed_count.0
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count.0
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count()) - i64::from(self.flag_count())
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn has_layout(&self) -> bool {
        !self.grid.is_empty()
    }

    pub fn has_content(&self) -> bool {
        self.content_ready
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.has_layout() && pos.in_bounds(self.rows(), self.cols())
    }

    /// The cell at `pos`, or `None` when out of bounds or before layout.
    pub fn access(&self, pos: Position) -> Option<&Cell> {
        if self.in_bounds(pos) {
            self.grid.get(pos.to_nd_index())
        } else {
            None
        }
    }

    fn access_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.in_bounds(pos) {
            self.grid.get_mut(pos.to_nd_index())
        } else {
            None
        }
    }

    /// Row-major iteration over every cell with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((x, y), cell)| (Position::new(x as Coord, y as Coord), cell))
    }

    pub fn sibling_positions(&self, pos: Position) -> Neighbors {
        let mut neighbors = pos.neighbors();
        neighbors.retain(|neighbor| self.in_bounds(*neighbor));
        neighbors
    }

    /// The up to eight in-bounds neighbors of `pos`.
    pub fn sibling_cells(&self, pos: Position) -> impl Iterator<Item = &Cell> + '_ {
        self.sibling_positions(pos)
            .into_iter()
            .filter_map(move |neighbor| self.access(neighbor))
    }

    /// Drops the grid and everything derived from it.
    pub fn reset(&mut self) {
        self.grid = Array2::default((0, 0));
        self.unrevealed_count = Saturating(0);
        self.flag_count = Saturating(0);
        self.status = BoardStatus::None;
        self.content_ready = false;
    }

    /// Allocates a fresh grid of hidden, mine-free cells.
    pub fn init_layout(&mut self) {
        self.reset();
        let shape = (self.rows() as usize, self.cols() as usize);
        self.grid = Array2::default(shape);
        self.unrevealed_count = Saturating(self.config.total_cells());
        log::debug!("Board layout ready, {} cells", self.config.total_cells());
    }

    /// Places the mines and computes every adjacent count.
    ///
    /// Runs once per layout: the cell at `first_click` never gets a mine, and later calls are
    /// ignored until the next [`Board::init_layout`].
    pub fn init_content<G: MineGenerator + ?Sized>(&mut self, first_click: Position, generator: &mut G) {
        if !self.has_layout() {
            log::warn!("Cannot place mines before the layout exists");
            return;
        }
        if self.content_ready {
            log::warn!("Mines already placed for this round, ignored");
            return;
        }
        if !self.in_bounds(first_click) {
            log::warn!("First click {first_click:?} is out of bounds, no mines placed");
            return;
        }

        let mut placed: CellCount = 0;
        for pos in generator.generate(&self.config, first_click) {
            match self.access_mut(pos) {
                Some(cell) if !cell.is_mined() => {
                    cell.set_mined(true);
                    placed += 1;
                }
                _ => log::warn!("Skipped mine at {pos:?}"),
            }
        }
        if placed != self.mine_count() {
            log::warn!(
                "Mine count mismatch, placed: {}, requested: {}",
                placed,
                self.mine_count()
            );
        }

        let counts: Vec<(Position, MineCount)> = self
            .cells()
            .filter(|(_, cell)| !cell.is_mined())
            .map(|(pos, _)| (pos, self.count_mined_siblings(pos)))
            .collect();
        for (pos, count) in counts {
            if let Some(cell) = self.access_mut(pos) {
                cell.set_mine_count(count);
            }
        }

        self.content_ready = true;
        log::debug!("Board content ready, first click at {first_click:?}");
    }

    fn count_mined_siblings(&self, pos: Position) -> MineCount {
        self.sibling_cells(pos).filter(|cell| cell.is_mined()).count() as MineCount
    }

    fn count_flagged_siblings(&self, pos: Position) -> usize {
        self.sibling_cells(pos).filter(|cell| cell.is_flagged()).count()
    }

    /// Reveals the cell at `pos`, flooding outwards when it has no adjacent mines.
    ///
    /// Ignored for positions that are out of bounds, already revealed, or flagged.
    pub fn reveal_block(&mut self, pos: Position) {
        let Some(&cell) = self.access(pos) else {
            return;
        };
        if cell.is_revealed() || cell.is_flagged() {
            return;
        }

        self.reveal_cell(pos);
        self.judge_outcome(pos);

        if self.access(pos).is_some_and(Cell::is_safe) {
            self.flood_from(pos);
        }

        self.judge_outcome(pos);
    }

    /// Breadth-first reveal of the zero region around `origin` and its numbered rim.
    fn flood_from(&mut self, origin: Position) {
        let mut seen: Array2<bool> = Array2::default(self.grid.dim());
        seen[origin.to_nd_index()] = true;

        let mut to_visit: VecDeque<Position> = VecDeque::new();
        for neighbor in self.sibling_positions(origin) {
            seen[neighbor.to_nd_index()] = true;
            to_visit.push_back(neighbor);
        }

        let mut revealed = 0usize;
        while let Some(visit) = to_visit.pop_front() {
            // a flagged cell stays hidden but still carries the flood past it
            let cell = self.grid[visit.to_nd_index()];
            if self.reveal_cell(visit).has_update() {
                revealed += 1;
            }

            if cell.is_safe() {
                for neighbor in self.sibling_positions(visit) {
                    if !seen[neighbor.to_nd_index()] {
                        seen[neighbor.to_nd_index()] = true;
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }

        log::trace!("Flood from {origin:?} revealed {revealed} cells");
    }

    /// Reveals every cell and clears every flag, for showing a finished round.
    pub fn reveal_all_blocks(&mut self) {
        let changes: Vec<CellChange> = self
            .grid
            .iter_mut()
            .flat_map(|cell| [cell.set_flagged(false), cell.set_revealed(true)])
            .collect();
        for change in changes {
            self.on_cell_change(change);
        }
        self.unrevealed_count = Saturating(0);
    }

    /// Chord reveal: opens every unflagged neighbor of a revealed numbered cell once at least
    /// as many neighbors are flagged as the cell's count.
    ///
    /// Flags are trusted, a misplaced one can open a mine.
    pub fn chord_reveal(&mut self, pos: Position) {
        let Some(&cell) = self.access(pos) else {
            return;
        };
        if !cell.is_revealed() || !cell.is_unsafe() {
            return;
        }

        let flagged = self.count_flagged_siblings(pos);
        if flagged < cell.mine_count() as usize {
            return;
        }

        for neighbor in self.sibling_positions(pos) {
            if self.access(neighbor).is_some_and(|cell| !cell.is_flagged()) {
                self.reveal_block(neighbor);
            }
        }
    }

    /// Flips the flag on a hidden cell.
    pub fn toggle_flag(&mut self, pos: Position) {
        let change = match self.access_mut(pos) {
            Some(cell) => {
                let flagged = cell.is_flagged();
                cell.set_flagged(!flagged)
            }
            None => return,
        };
        self.on_cell_change(change);
    }

    /// Settles the round after `pos` was opened: a mine there fails it, and running out of safe
    /// cells wins it. A finished board keeps its status.
    pub fn judge_outcome(&mut self, pos: Position) {
        if self.status.is_finished() {
            return;
        }
        if self.access(pos).is_some_and(Cell::is_mined) {
            self.status = BoardStatus::Fail;
            log::debug!("Mine revealed at {pos:?}");
            return;
        }
        if self.has_content() && self.unrevealed_count.0 == self.mine_count() {
            self.status = BoardStatus::Success;
            log::debug!("Every safe cell revealed");
        }
    }

    /// Cells to highlight when hovering `pos`: a hidden cell itself, or the hidden neighbors of a
    /// revealed numbered cell.
    pub fn highlight_targets(&self, pos: Position) -> Neighbors {
        let mut targets = Neighbors::new();
        let Some(cell) = self.access(pos) else {
            return targets;
        };

        if !cell.is_revealed() {
            targets.push(pos);
        } else if cell.is_unsafe() {
            targets.extend(
                self.sibling_positions(pos)
                    .into_iter()
                    .filter(|&neighbor| self.access(neighbor).is_some_and(|cell| !cell.is_revealed())),
            );
        }
        targets
    }

    fn reveal_cell(&mut self, pos: Position) -> CellChange {
        let change = match self.access_mut(pos) {
            Some(cell) => cell.set_revealed(true),
            None => CellChange::NoChange,
        };
        self.on_cell_change(change);
        change
    }

    fn on_cell_change(&mut self, change: CellChange) {
        match change {
            CellChange::NoChange => {}
            CellChange::Revealed => self.on_block_revealed(),
            CellChange::Flagged(flagged) => self.on_block_flagged(flagged),
        }
    }

    fn on_block_revealed(&mut self) {
        self.unrevealed_count -= 1;
    }

    fn on_block_flagged(&mut self, flagged: bool) {
        if flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
    }
}
