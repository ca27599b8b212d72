use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of opening a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenResult {
    /// Number of cells newly revealed, the opened cell included.
    Opened(CellCount),
    HitMine,
}

/// Mine layout, hints and the two player masks. Knows nothing about win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayBoard {
    layout: MineLayout,
    hints: HintGrid,
    revealed: Array2<bool>,
    flags: Array2<bool>,
    /// Revealed safe cells. A triggered mine is revealed but not counted.
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl PlayBoard {
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        let hints = derive_hints(&layout);
        Self {
            layout,
            hints,
            revealed: Array2::default((size, size).to_nd_index()),
            flags: Array2::default((size, size).to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn hints(&self) -> &HintGrid {
        &self.hints
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn hint_at(&self, coords: Coord2) -> Hint {
        self.hints[coords]
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flags[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// True once every cell without a mine has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.revealed_count == self.layout.safe_cell_count()
    }

    /// Opens a hidden, unflagged cell, expanding through zero hints.
    ///
    /// All preconditions are checked before anything is written, a rejected
    /// call leaves the board untouched.
    pub fn open_cell(&mut self, coords: Coord2) -> Result<OpenResult> {
        let coords = self.layout.validate_coords(coords)?;
        if self.is_revealed(coords) {
            return Err(GameError::AlreadyOpen);
        }
        if self.is_flagged(coords) {
            return Err(GameError::FlagBlocksOpen);
        }

        let hint = self.hints[coords];
        log::debug!("Open cell at {:?}, hint: {:?}", coords, hint);

        if hint.is_mine() {
            self.revealed[coords.to_nd_index()] = true;
            return Ok(OpenResult::HitMine);
        }

        self.mark_revealed(coords);
        Ok(match hint {
            Hint::Count(0) => OpenResult::Opened(1 + self.reveal_region(coords)),
            _ => OpenResult::Opened(1),
        })
    }

    /// Flips the flag on an unrevealed cell and returns whether it is now flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.layout.validate_coords(coords)?;
        if self.is_revealed(coords) {
            return Err(GameError::CellAlreadyRevealed);
        }

        let flag = &mut self.flags[coords.to_nd_index()];
        *flag = !*flag;
        if *flag {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(*flag)
    }

    /// Flood fill from an already revealed zero cell. Returns how many cells it revealed.
    ///
    /// Only freshly revealed zero cells are pushed, and a cell is revealed at
    /// most once, so every cell enters the worklist at most once.
    fn reveal_region(&mut self, origin: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_expand = vec![origin];

        while let Some(zero_coords) = to_expand.pop() {
            for pos in self.layout.iter_neighbors(zero_coords) {
                // flagged cells stay hidden and keep their flag
                if self.is_revealed(pos) || self.is_flagged(pos) {
                    continue;
                }
                let hint = self.hints[pos];
                if hint.is_mine() {
                    continue;
                }

                self.mark_revealed(pos);
                opened += 1;
                log::trace!("Flood opened cell at {:?}, hint: {:?}", pos, hint);

                if hint.is_zero() {
                    to_expand.push(pos);
                }
            }
        }

        opened
    }

    /// Reveals a safe cell.
    fn mark_revealed(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;
    }
}
