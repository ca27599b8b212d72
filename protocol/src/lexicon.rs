use minebot_core::{CellView, Coord2, GameError};

/// User-facing strings and cell glyphs.
pub struct Lexicon;

impl Lexicon {
    pub const START: &'static str = "Here is your board. Make your move.";
    pub const HELP: &'static str = "Minesweeper, the classic! Tap a cell to open it. \
        Don't step on a mine! 💣\n\
        Use /flag X Y to put or remove a flag, X and Y are the row and column.\n\
        Press /start to begin.";
    pub const NEXT_MOVE: &'static str = "Make your next move.";
    pub const HIT_MINE: &'static str = "💥 You stepped on a mine! Game over.";
    pub const WIN: &'static str = "🎉 Congratulations! You found every safe cell!";
    pub const FLAG_USAGE: &'static str =
        "Usage: /flag X Y (for example: /flag 2 3), where X and Y are board coordinates.";
    pub const INVALID_CELL: &'static str = "That cell is not on the board.";
    pub const UNKNOWN_COMMAND: &'static str = "I don't know that command. Try /help.";

    pub const CLOSED: &'static str = "⬜";
    pub const MINE: &'static str = "💣";
    pub const EMPTY: &'static str = " ";
    pub const FLAG: &'static str = "🚩";

    pub fn flag_set((x, y): Coord2) -> String {
        format!("Flag placed on cell ({x}, {y}).")
    }

    pub fn flag_removed((x, y): Coord2) -> String {
        format!("Flag removed from cell ({x}, {y}).")
    }

    /// Text shown to the player when a move is rejected.
    pub fn game_error(error: GameError) -> String {
        match error {
            GameError::NoActiveGame => "Start a game first with /start.".to_owned(),
            GameError::GameAlreadyOver => "The game is over! Press /start for a new game.".to_owned(),
            GameError::AlreadyOpen => "You have already opened this cell!".to_owned(),
            GameError::FlagBlocksOpen => {
                "Remove the flag from this cell first with /flag.".to_owned()
            }
            GameError::CellAlreadyRevealed => "You can't flag a cell that is already open!".to_owned(),
            GameError::OutOfBounds { .. } => Self::INVALID_CELL.to_owned(),
            GameError::Config { .. } => error.to_string(),
        }
    }

    pub fn glyph(cell: CellView) -> String {
        match cell {
            CellView::Hidden => Self::CLOSED.to_owned(),
            CellView::Flagged => Self::FLAG.to_owned(),
            CellView::RevealedEmpty => Self::EMPTY.to_owned(),
            CellView::RevealedNumber(count) => count.to_string(),
            CellView::RevealedMine => Self::MINE.to_owned(),
        }
    }
}
