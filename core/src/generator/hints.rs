use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hint for every cell of a layout. Built once per board and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintGrid {
    hints: Array2<Hint>,
}

impl HintGrid {
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Hint)> + '_ {
        self.hints
            .indexed_iter()
            .map(|((x, y), &hint)| ((x as Coord, y as Coord), hint))
    }
}

impl Index<Coord2> for HintGrid {
    type Output = Hint;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.hints[coords.to_nd_index()]
    }
}

/// Counts the mines around every safe cell; mine cells get [`Hint::Mine`].
pub fn derive_hints(layout: &MineLayout) -> HintGrid {
    let size = layout.size();
    let hints = Array2::from_shape_fn((size, size).to_nd_index(), |(x, y)| {
        let coords = (x as Coord, y as Coord);
        if layout.contains_mine(coords) {
            Hint::Mine
        } else {
            Hint::Count(layout.adjacent_mine_count(coords))
        }
    });
    HintGrid { hints }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(layout: &MineLayout, (x, y): Coord2) -> u8 {
        let size = i16::from(layout.size());
        let mut count = 0;
        for dx in -1i16..=1 {
            for dy in -1i16..=1 {
                let (nx, ny) = (i16::from(x) + dx, i16::from(y) + dy);
                if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= size || ny >= size {
                    continue;
                }
                if layout.contains_mine((nx as Coord, ny as Coord)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn hints_match_neighborhood_counts() {
        for seed in 0..32 {
            let layout = RandomMinefieldGenerator::new(seed).generate(GameConfig::default());
            let hints = derive_hints(&layout);

            for (coords, hint) in hints.iter() {
                if layout.contains_mine(coords) {
                    assert_eq!(hint, Hint::Mine);
                } else {
                    assert_eq!(hint, Hint::Count(brute_force_count(&layout, coords)));
                }
            }
        }
    }

    #[test]
    fn hints_surrounding_single_mine() {
        let layout = MineLayout::from_mine_coords(3, &[(1, 1)]).unwrap();
        let hints = derive_hints(&layout);

        assert_eq!(hints[(1, 1)], Hint::Mine);
        assert!(
            hints
                .iter()
                .filter(|&(coords, _)| coords != (1, 1))
                .all(|(_, hint)| hint == Hint::Count(1))
        );
    }

    #[test]
    fn cell_surrounded_by_mines_counts_eight() {
        let ring: Vec<_> = NeighborIter::new((1, 1), 3).collect();
        let layout = MineLayout::from_mine_coords(3, &ring).unwrap();

        assert_eq!(derive_hints(&layout)[(1, 1)], Hint::Count(8));
    }

    #[test]
    fn derivation_is_deterministic() {
        let layout = RandomMinefieldGenerator::new(3).generate(GameConfig::default());

        assert_eq!(derive_hints(&layout), derive_hints(&layout));
    }
}
