use minebot_core::BoardView;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub callback: String,
}

/// Inline button grid mirroring the board, one row per board row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Hidden cells of a running game get an open token, every other button is inert.
    pub fn from_view(view: &BoardView) -> Self {
        let rows = view
            .rows()
            .map(|row| {
                row.into_iter()
                    .map(|(coords, cell)| {
                        let callback = if view.can_open(coords) {
                            Callback::Cell(CellToken::new(coords))
                        } else {
                            Callback::Noop
                        };
                        Button {
                            text: Lexicon::glyph(cell),
                            callback: callback.encode(),
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minebot_core::*;

    fn session() -> GameSession {
        GameSession::from_layout(MineLayout::from_mine_coords(3, &[(0, 0)]).unwrap())
    }

    #[test]
    fn fresh_board_is_all_open_tokens() {
        let keyboard = Keyboard::from_view(&session().view());

        assert_eq!(keyboard.rows.len(), 3);
        assert_eq!(keyboard.rows[1][2].text, "⬜");
        assert_eq!(keyboard.rows[1][2].callback, "minesweeper:1:2");
        assert!(keyboard.buttons().all(|button| button.callback != "noop"));
    }

    #[test]
    fn revealed_and_flagged_cells_are_inert() {
        let mut session = session();
        session.open((1, 1)).unwrap();
        session.toggle_flag((0, 0)).unwrap();
        let keyboard = Keyboard::from_view(&session.view());

        assert_eq!(keyboard.rows[1][1].text, "1");
        assert_eq!(keyboard.rows[1][1].callback, "noop");
        assert_eq!(keyboard.rows[0][0].text, "🚩");
        assert_eq!(keyboard.rows[0][0].callback, "noop");
        assert_eq!(keyboard.rows[2][2].callback, "minesweeper:2:2");
    }

    #[test]
    fn finished_board_has_no_open_tokens() {
        let mut session = session();
        session.open((0, 0)).unwrap();
        let keyboard = Keyboard::from_view(&session.view());

        assert_eq!(keyboard.rows[0][0].text, "💣");
        assert!(keyboard.buttons().all(|button| button.callback == "noop"));
    }
}
