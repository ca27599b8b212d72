use core::fmt;
use core::str::FromStr;
use minebot_core::{Coord, Coord2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Callback data attached to a hidden cell's button: `minesweeper:<x>:<y>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellToken {
    pub x: Coord,
    pub y: Coord,
}

impl CellToken {
    pub const PREFIX: &'static str = "minesweeper";
    const SEPARATOR: char = ':';

    pub const fn new((x, y): Coord2) -> Self {
        Self { x, y }
    }

    pub const fn coords(self) -> Coord2 {
        (self.x, self.y)
    }

    pub fn encode(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = Self::SEPARATOR;
        write!(f, "{}{sep}{}{sep}{}", Self::PREFIX, self.x, self.y)
    }
}

impl FromStr for CellToken {
    type Err = ProtocolError;

    fn from_str(data: &str) -> Result<Self> {
        let malformed = || ProtocolError::MalformedToken(data.to_owned());

        let mut parts = data.split(Self::SEPARATOR);
        if parts.next() != Some(Self::PREFIX) {
            return Err(malformed());
        }
        let mut coord = || -> Result<Coord> {
            // digits only, so "+1" and "-0" do not sneak through
            let part = parts.next().filter(|part| {
                !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
            });
            part.and_then(|part| part.parse().ok()).ok_or_else(malformed)
        };
        let x = coord()?;
        let y = coord()?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self { x, y })
    }
}

/// Everything a button tap can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Callback {
    Cell(CellToken),
    /// Inert buttons: revealed cells, flags, finished boards.
    Noop,
}

impl Callback {
    pub const NOOP: &'static str = "noop";

    pub fn parse(data: &str) -> Result<Self> {
        if data == Self::NOOP {
            Ok(Self::Noop)
        } else {
            data.parse().map(Self::Cell)
        }
    }

    pub fn encode(self) -> String {
        match self {
            Self::Cell(token) => token.encode(),
            Self::Noop => Self::NOOP.to_owned(),
        }
    }
}
