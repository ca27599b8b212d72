use minebot_core::{Coord, Coord2, PlayerId};
use serde::{Deserialize, Serialize};

use crate::*;

/// Inbound player action, already tied to the player who sent it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    StartGame { player: PlayerId },
    Help { player: PlayerId },
    ToggleFlag { player: PlayerId, x: Coord, y: Coord },
    OpenCell { player: PlayerId, x: Coord, y: Coord },
    Noop { player: PlayerId },
}

impl Action {
    pub fn player(self) -> PlayerId {
        match self {
            Self::StartGame { player }
            | Self::Help { player }
            | Self::ToggleFlag { player, .. }
            | Self::OpenCell { player, .. }
            | Self::Noop { player } => player,
        }
    }

    pub fn from_command(player: PlayerId, command: Command) -> Self {
        match command {
            Command::Start => Self::StartGame { player },
            Command::Help => Self::Help { player },
            Command::Flag((x, y)) => Self::ToggleFlag { player, x, y },
        }
    }

    pub fn from_callback(player: PlayerId, callback: Callback) -> Self {
        match callback {
            Callback::Cell(token) => {
                let (x, y) = token.coords();
                Self::OpenCell { player, x, y }
            }
            Callback::Noop => Self::Noop { player },
        }
    }

    /// Cell targeted by the action, if any.
    pub fn coords(self) -> Option<Coord2> {
        match self {
            Self::ToggleFlag { x, y, .. } | Self::OpenCell { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
