use minebot_core::{Coord, Coord2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Text commands a player can type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Help,
    Flag(Coord2),
}

impl Command {
    /// Parses `/start`, `/help` and `/flag X Y`. A `@botname` suffix on the command is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut words = text.split_whitespace();
        let head = words.next().unwrap_or_default();
        let name = head
            .strip_prefix('/')
            .map(|name| name.split_once('@').map_or(name, |(name, _)| name))
            .ok_or_else(|| ProtocolError::UnknownCommand(head.to_owned()))?;

        match name {
            "start" => Ok(Self::Start),
            "help" => Ok(Self::Help),
            "flag" => {
                let args: Vec<_> = words.collect();
                let [x, y] = args.as_slice() else {
                    return Err(ProtocolError::Usage);
                };
                Ok(Self::Flag((parse_coord(x)?, parse_coord(y)?)))
            }
            _ => Err(ProtocolError::UnknownCommand(head.to_owned())),
        }
    }
}

fn parse_coord(arg: &str) -> Result<Coord> {
    if arg.bytes().all(|byte| byte.is_ascii_digit()) {
        arg.parse().map_err(|_| ProtocolError::Usage)
    } else {
        Err(ProtocolError::Usage)
    }
}
