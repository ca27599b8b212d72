use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use registry::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod registry;
mod session;
mod tile;
mod types;
mod view;

/// Board side used by the reference deployment.
pub const DEFAULT_SIZE: Coord = 8;

/// Mine count used by the reference deployment.
pub const DEFAULT_MINES: CellCount = 10;

/// Shape of a board: a `size × size` square holding `mines` mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Validates that the board is non-empty and leaves at least one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines >= mult(size, size) {
            return Err(GameError::Config { size, mines });
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                x: coords.0,
                y: coords.1,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mines: DEFAULT_MINES,
        }
    }
}

/// Where the mines are. Never mutated once built, a reset builds a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    config: GameConfig,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let size = side_of(&mine_mask);
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mines = CellCount::try_from(mines).map_err(|_| GameError::Config {
            size,
            mines: CellCount::MAX,
        })?;
        let config = GameConfig::new(size, mines)?;
        Ok(Self { mine_mask, config })
    }

    /// Builds a fixed layout, duplicated coordinates count once.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::Config { size, mines: 0 });
        }
        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds {
                    x: coords.0,
                    y: coords.1,
                });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        self.config
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors, always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_boards_without_safe_cells() {
        assert_eq!(
            GameConfig::new(2, 4),
            Err(GameError::Config { size: 2, mines: 4 })
        );
        assert_eq!(
            GameConfig::new(0, 0),
            Err(GameError::Config { size: 0, mines: 0 })
        );
        assert!(GameConfig::new(2, 3).is_ok());
        assert!(GameConfig::new(8, 0).is_ok());
    }

    #[test]
    fn default_config_is_reference_board() {
        let config = GameConfig::default();

        assert_eq!(config.size(), 8);
        assert_eq!(config.mines(), 10);
        assert_eq!(config.safe_cells(), 54);
    }

    #[test]
    fn layout_from_coords_counts_distinct_mines() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0), (2, 2), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert!(layout.contains_mine((2, 2)));
        assert!(!layout.contains_mine((1, 1)));
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn layout_from_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::OutOfBounds { x: 3, y: 0 })
        );
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let config = GameConfig::default();

        assert_eq!(config.validate_coords((7, 7)), Ok((7, 7)));
        assert_eq!(
            config.validate_coords((0, 8)),
            Err(GameError::OutOfBounds { x: 0, y: 8 })
        );
    }
}
