use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Picks `count` distinct indices from `0..upper`, never `exclude`, uniformly at random.
///
/// Partial Fisher-Yates over the candidate pool, so any `count` up to `upper - 1` works.
/// Asking for more than the pool holds returns the whole pool.
pub fn sample_indices_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    upper: CellCount,
    count: CellCount,
    exclude: CellCount,
) -> Vec<CellCount> {
    let mut pool: Vec<CellCount> = (0..upper).filter(|&index| index != exclude).collect();
    let count = usize::try_from(count).map_or(pool.len(), |count| count.min(pool.len()));

    for i in 0..count {
        let pick = rng.random_range(i..pool.len());
        pool.swap(i, pick);
    }

    pool.truncate(count);
    pool
}

/// Uniform placement that keeps the first clicked cell free of mines.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig, first_click: Position) -> Vec<Position> {
        let total_cells = config.total_cells();
        let exclude = first_click.to_index(config.cols());

        let indices = sample_indices_excluding(&mut self.rng, total_cells, config.mine_count(), exclude);
        if indices.len() as CellCount != config.mine_count() {
            log::warn!(
                "Cannot place all mines, requested {} but only {} fit",
                config.mine_count(),
                indices.len()
            );
        }

        indices
            .into_iter()
            .map(|index| Position::from_index(index, config.cols()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_distinct_and_skips_exclude() {
        let mut rng = SmallRng::seed_from_u64(7);

        for exclude in [0, 17, 35] {
            let mut picked = sample_indices_excluding(&mut rng, 36, 20, exclude);
            assert_eq!(picked.len(), 20);
            assert!(!picked.contains(&exclude));
            assert!(picked.iter().all(|&index| index < 36));

            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 20);
        }
    }

    #[test]
    fn sample_can_fill_everything_but_exclude() {
        let mut rng = SmallRng::seed_from_u64(11);

        let mut picked = sample_indices_excluding(&mut rng, 36, 35, 4);
        picked.sort_unstable();

        let expected: Vec<CellCount> = (0..36).filter(|&index| index != 4).collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn oversized_request_returns_whole_pool() {
        let mut rng = SmallRng::seed_from_u64(3);

        let picked = sample_indices_excluding(&mut rng, 10, 50, 0);

        assert_eq!(picked.len(), 9);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::EXPERT;
        let first_click = Position::new(8, 15);

        let a = RandomMineGenerator::new(42).generate(&config, first_click);
        let b = RandomMineGenerator::new(42).generate(&config, first_click);

        assert_eq!(a, b);
        assert_eq!(a.len(), 99);
        assert!(!a.contains(&first_click));
    }
}
