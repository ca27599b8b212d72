use crate::*;
pub use hints::*;
pub use random::*;

mod hints;
mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Validates the requested shape and lays out `mines` mines at random on a `size × size` board.
pub fn generate(size: Coord, mines: CellCount, seed: u64) -> Result<MineLayout> {
    let config = GameConfig::new(size, mines)?;
    Ok(RandomMinefieldGenerator::new(seed).generate(config))
}
