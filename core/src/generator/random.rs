use ndarray::Array2;

use super::*;

/// Purely random generation: every subset of `mines` cells is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let size = config.size();
        let side = usize::from(size);
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines());
        log::debug!(
            "Generating {}x{} minefield with {} mines, seed {}",
            size,
            size,
            mines,
            self.seed
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        // sampling indices without replacement, no retries needed
        for index in rand::seq::index::sample(&mut rng, total_cells, mines).into_iter() {
            mine_mask[[index / side, index % side]] = true;
        }

        // double check mine count
        let count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if count != mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                mines
            );
        }

        MineLayout { mine_mask, config }
    }
}
