use minebot_core::BoardView;
use serde::{Deserialize, Serialize};

use crate::*;

/// How the transport should deliver a reply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// A new chat message.
    Message,
    /// Replace the message holding the tapped board.
    Edit,
    /// Short notice attached to a button tap, the board stays as it is.
    Toast,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Message,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn edit(text: impl Into<String>, view: &BoardView) -> Self {
        Self {
            kind: ReplyKind::Edit,
            text: text.into(),
            keyboard: Some(Keyboard::from_view(view)),
        }
    }

    pub fn toast(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Toast,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_board(mut self, view: &BoardView) -> Self {
        self.keyboard = Some(Keyboard::from_view(view));
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
