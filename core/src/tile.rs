use serde::{Deserialize, Serialize};

/// Per-cell entry of the hint grid, derived once from the mine layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Mine,
    Count(u8),
}

impl Hint {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for Hint {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell, what the transport turns into glyphs and buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    RevealedEmpty,
    RevealedNumber(u8),
    RevealedMine,
}

impl CellView {
    /// Only hidden cells offer an "open" action.
    pub const fn is_openable(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(
            self,
            Self::RevealedEmpty | Self::RevealedNumber(_) | Self::RevealedMine
        )
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<Hint> for CellView {
    fn from(hint: Hint) -> Self {
        match hint {
            Hint::Mine => Self::RevealedMine,
            Hint::Count(0) => Self::RevealedEmpty,
            Hint::Count(count) => Self::RevealedNumber(count),
        }
    }
}
