use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a transport needs to draw a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    status: GameStatus,
    mines_left: i32,
    triggered_mine: Option<Coord2>,
    cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let status = session.status();
        let size = board.size();
        let cells = Array2::from_shape_fn((size, size).to_nd_index(), |(x, y)| {
            cell_view(board, status, (x as Coord, y as Coord))
        });

        Self {
            status,
            mines_left: session.mines_left(),
            triggered_mine: session.triggered_mine(),
            cells,
        }
    }

    pub fn size(&self) -> Coord {
        side_of(&self.cells)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mines_left(&self) -> i32 {
        self.mines_left
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// No cell accepts input once the game is over.
    pub fn is_interactive(&self) -> bool {
        self.status.is_in_progress()
    }

    pub fn can_open(&self, coords: Coord2) -> bool {
        self.is_interactive() && self.cell_at(coords).is_openable()
    }

    /// Row-major cells, one `Vec` per row.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(Coord2, CellView)>> + '_ {
        self.cells.outer_iter().enumerate().map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(|(y, &cell)| ((x as Coord, y as Coord), cell))
                .collect()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }
}

/// Lost games show every mine, won games show the untouched mines as flagged.
fn cell_view(board: &PlayBoard, status: GameStatus, coords: Coord2) -> CellView {
    let hint = board.hint_at(coords);
    if board.is_revealed(coords) {
        return hint.into();
    }

    match (status, hint.is_mine(), board.is_flagged(coords)) {
        (GameStatus::Lost, true, _) => CellView::RevealedMine,
        (GameStatus::Won, true, _) => CellView::Flagged,
        (_, _, true) => CellView::Flagged,
        _ => CellView::Hidden,
    }
}
