use crate::*;
pub use random::*;

mod random;

/// Chooses which cells of a fresh layout receive mines.
pub trait MineGenerator {
    /// Returns distinct in-bounds positions, never including `first_click`.
    fn generate(&mut self, config: &GameConfig, first_click: Position) -> Vec<Position>;
}

/// Places mines at fixed positions, handy for scripted rounds.
///
/// Entries that are out of bounds, repeated, or under the first click are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetMineGenerator {
    mines: Vec<Position>,
}

impl PresetMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = impl Into<Position>>) -> Self {
        Self {
            mines: mines.into_iter().map(Into::into).collect(),
        }
    }
}

impl MineGenerator for PresetMineGenerator {
    fn generate(&mut self, config: &GameConfig, first_click: Position) -> Vec<Position> {
        let mut mines: Vec<Position> = Vec::with_capacity(self.mines.len());
        for &pos in &self.mines {
            if !pos.in_bounds(config.rows(), config.cols()) {
                log::warn!("Preset mine at {pos:?} is out of bounds, skipped");
            } else if pos == first_click {
                log::warn!("Preset mine at {pos:?} is under the first click, skipped");
            } else if !mines.contains(&pos) {
                mines.push(pos);
            }
        }
        mines
    }
}
