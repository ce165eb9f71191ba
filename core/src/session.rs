use crate::*;

/// Single entry point for the UI layer.
///
/// Owns the board and the current [`GamePhase`]. Every operation is routed through the phase:
/// calls that make no sense in the current phase are silently ignored, so any operation is safe to
/// call at any time.
#[derive(Clone, Debug)]
pub struct Session<G = RandomMineGenerator> {
    board: Board,
    phase: GamePhase,
    generator: G,
}

impl Session {
    /// Session with mines placed from OS entropy.
    pub fn new() -> Self {
        Self::with_generator(RandomMineGenerator::from_os_rng())
    }

    /// Reproducible session, the same seed and clicks give the same rounds.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(RandomMineGenerator::new(seed))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MineGenerator> Session<G> {
    /// Starts in [`GamePhase::Launched`] holding an unlaid beginner board.
    pub fn with_generator(generator: G) -> Self {
        Self {
            board: Board::new(GameConfig::default()),
            phase: GamePhase::Launched,
            generator,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> Coord {
        self.board.rows()
    }

    pub fn cols(&self) -> Coord {
        self.board.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.board.unrevealed_count()
    }

    pub fn mines_left(&self) -> i64 {
        self.board.mines_left()
    }

    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    pub fn access(&self, pos: Position) -> Option<&Cell> {
        self.board.access(pos)
    }

    pub fn highlight(&self, pos: Position) -> Neighbors {
        self.board.highlight_targets(pos)
    }

    fn transfer(&mut self, next: GamePhase) {
        log::debug!("Phase {} -> {}", self.phase, next);
        self.phase = next;
    }

    /// Replaces the board with a new one built from the arguments.
    ///
    /// On rejected arguments the session falls back to [`GamePhase::Launched`], keeps its
    /// previous board, and reports the failed transfer.
    pub fn init_arguments(
        &mut self,
        rows: Coord,
        cols: Coord,
        mine_count: CellCount,
    ) -> Result<(), StateTransferError> {
        use GamePhase::*;
        match self.phase {
            Launched | LayoutReady | GameReady | GameSuccess | GameFail => {
                self.transfer(ArgumentsReady);
                self.init_arguments(rows, cols, mine_count)
            }
            ArgumentsReady => match Board::create(rows, cols, mine_count) {
                Ok(board) => {
                    self.board = board;
                    Ok(())
                }
                Err(cause) => {
                    log::debug!("Rejected board arguments: {cause}");
                    self.transfer(Launched);
                    Err(StateTransferError {
                        target: ArgumentsReady,
                        cause,
                    })
                }
            },
        }
    }

    pub fn init_layout(&mut self) {
        use GamePhase::*;
        match self.phase {
            ArgumentsReady => {
                self.transfer(LayoutReady);
                self.init_layout();
            }
            LayoutReady => self.board.init_layout(),
            Launched | GameReady | GameSuccess | GameFail => {}
        }
    }

    /// Places the mines around the first click, starting play.
    pub fn init_content(&mut self, first_click: Position) {
        use GamePhase::*;
        match self.phase {
            LayoutReady => {
                if !self.board.in_bounds(first_click) {
                    return;
                }
                self.transfer(GameReady);
                self.init_content(first_click);
            }
            GameReady => self.board.init_content(first_click, &mut self.generator),
            Launched | ArgumentsReady | GameSuccess | GameFail => {}
        }
    }

    pub fn reveal_block(&mut self, pos: Position) {
        use GamePhase::*;
        match self.phase {
            LayoutReady => {
                if !self.board.in_bounds(pos) {
                    return;
                }
                self.init_content(pos);
                self.reveal_block(pos);
            }
            GameReady => {
                self.board.reveal_block(pos);
                self.board.judge_outcome(pos);
                self.settle();
            }
            Launched | ArgumentsReady | GameSuccess | GameFail => {}
        }
    }

    /// Chord reveal around a revealed numbered cell.
    pub fn reveal_sibling_blocks(&mut self, pos: Position) {
        use GamePhase::*;
        match self.phase {
            GameReady => {
                self.board.chord_reveal(pos);
                self.board.judge_outcome(pos);
                self.settle();
            }
            Launched | ArgumentsReady | LayoutReady | GameSuccess | GameFail => {}
        }
    }

    pub fn toggle_flag(&mut self, pos: Position) {
        use GamePhase::*;
        match self.phase {
            GameReady => self.board.toggle_flag(pos),
            Launched | ArgumentsReady | LayoutReady | GameSuccess | GameFail => {}
        }
    }

    /// Ends the round as won. Once won, shows the whole board.
    pub fn succeed(&mut self) {
        use GamePhase::*;
        match self.phase {
            GameReady => {
                self.transfer(GameSuccess);
                self.succeed();
            }
            GameSuccess => self.board.reveal_all_blocks(),
            Launched | ArgumentsReady | LayoutReady | GameFail => {}
        }
    }

    /// Ends the round as lost. Once lost, shows the whole board.
    pub fn fail(&mut self) {
        use GamePhase::*;
        match self.phase {
            GameReady => {
                self.transfer(GameFail);
                self.fail();
            }
            GameFail => self.board.reveal_all_blocks(),
            Launched | ArgumentsReady | LayoutReady | GameSuccess => {}
        }
    }

    /// Starts a new round on the same arguments with a fresh, empty grid.
    pub fn restart(&mut self) {
        use GamePhase::*;
        match self.phase {
            GameReady | GameSuccess | GameFail => {
                self.transfer(LayoutReady);
                self.restart();
            }
            LayoutReady => {
                self.board.reset();
                self.init_layout();
            }
            Launched | ArgumentsReady => {}
        }
    }

    /// Moves into [`GamePhase::GameSuccess`] or [`GamePhase::GameFail`] once the board has decided
    /// the round.
    fn settle(&mut self) {
        match self.board.status() {
            BoardStatus::None => {}
            BoardStatus::Success => self.succeed(),
            BoardStatus::Fail => self.fail(),
        }
    }

    /// Accepts new arguments and lays out the grid in one go.
    pub fn new_game(&mut self, rows: Coord, cols: Coord, mine_count: CellCount) -> Result<(), StateTransferError> {
        self.init_arguments(rows, cols, mine_count)?;
        self.init_layout();
        Ok(())
    }

    pub fn new_preset_game(&mut self, difficulty: Difficulty) -> Result<(), StateTransferError> {
        let config = difficulty.config();
        self.new_game(config.rows(), config.cols(), config.mine_count())
    }

    /// Primary click: opens a hidden cell, or chords a revealed numbered one.
    pub fn click(&mut self, pos: Position) {
        let Some(&cell) = self.board.access(pos) else {
            return;
        };
        if !cell.is_revealed() {
            if !cell.is_flagged() {
                self.reveal_block(pos);
            }
        } else if cell.is_unsafe() {
            self.reveal_sibling_blocks(pos);
        }
    }
}
