use std::sync::Arc;

use minebot_core::*;
use minebot_protocol::*;

/// Turns inbound actions into registry calls and the replies to send back.
#[derive(Clone, Debug)]
pub struct Handler {
    registry: Arc<SessionRegistry>,
}

impl Handler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Handles a typed chat message.
    pub fn handle_text(&self, player: PlayerId, text: &str) -> Vec<Reply> {
        match Command::parse(text) {
            Ok(command) => self.handle(Action::from_command(player, command)),
            Err(ProtocolError::Usage) => self.flag_usage(player),
            Err(err) => {
                log::debug!("Player {} sent {:?}: {}", player, text, err);
                vec![Reply::message(Lexicon::UNKNOWN_COMMAND)]
            }
        }
    }

    /// Handles a button tap carrying callback data.
    pub fn handle_callback(&self, player: PlayerId, data: &str) -> Vec<Reply> {
        match Callback::parse(data) {
            Ok(callback) => self.handle(Action::from_callback(player, callback)),
            Err(err) => {
                log::warn!("Player {} tapped a button with {}", player, err);
                vec![Reply::toast("")]
            }
        }
    }

    pub fn handle(&self, action: Action) -> Vec<Reply> {
        log::debug!("Handling {:?}", action);
        match action {
            Action::StartGame { player } => {
                let view = self.registry.start(player);
                vec![Reply::message(Lexicon::START).with_board(&view)]
            }
            Action::Help { .. } => vec![Reply::message(Lexicon::HELP)],
            Action::ToggleFlag { player, x, y } => self.toggle_flag(player, (x, y)),
            Action::OpenCell { player, x, y } => self.open(player, (x, y)),
            Action::Noop { .. } => vec![Reply::toast("")],
        }
    }

    fn toggle_flag(&self, player: PlayerId, coords: Coord2) -> Vec<Reply> {
        match self.registry.toggle_flag(player, coords) {
            Ok((flagged, view)) => {
                let notice = if flagged {
                    Lexicon::flag_set(coords)
                } else {
                    Lexicon::flag_removed(coords)
                };
                vec![
                    Reply::message(notice),
                    Reply::message(Lexicon::NEXT_MOVE).with_board(&view),
                ]
            }
            Err(GameError::OutOfBounds { .. }) => vec![Reply::message(Lexicon::FLAG_USAGE)],
            Err(err) => vec![Reply::message(Lexicon::game_error(err))],
        }
    }

    /// Usage help only makes sense while there is a game to flag.
    fn flag_usage(&self, player: PlayerId) -> Vec<Reply> {
        let text = match self.registry.view(player) {
            Err(err) => Lexicon::game_error(err),
            Ok(view) if !view.is_interactive() => Lexicon::game_error(GameError::GameAlreadyOver),
            Ok(_) => Lexicon::FLAG_USAGE.to_owned(),
        };
        vec![Reply::message(text)]
    }

    fn open(&self, player: PlayerId, coords: Coord2) -> Vec<Reply> {
        match self.registry.open(player, coords) {
            Ok((outcome, view)) => {
                let text = match outcome {
                    OpenOutcome::HitMine => Lexicon::HIT_MINE,
                    OpenOutcome::Won(_) => Lexicon::WIN,
                    OpenOutcome::Revealed(_) => Lexicon::NEXT_MOVE,
                };
                vec![Reply::edit(text, &view)]
            }
            Err(err) => vec![Reply::toast(Lexicon::game_error(err))],
        }
    }
}
