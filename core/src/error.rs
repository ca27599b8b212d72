use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {mines} mines do not fit a {size}x{size} board")]
    Config { size: Coord, mines: CellCount },
    #[error("No active game, start one first")]
    NoActiveGame,
    #[error("Game already ended, no new moves are accepted")]
    GameAlreadyOver,
    #[error("Cell is already open")]
    AlreadyOpen,
    #[error("Cell is flagged, remove the flag before opening it")]
    FlagBlocksOpen,
    #[error("Cannot flag a cell that is already open")]
    CellAlreadyRevealed,
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: Coord, y: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
