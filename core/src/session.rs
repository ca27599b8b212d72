use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only a reset, which replaces the whole board, leaves a final state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a successful open
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenOutcome {
    /// Cells were revealed and the game goes on
    Revealed(CellCount),
    /// The cell was a mine, game lost
    HitMine,
    /// The last safe cells were revealed, game won
    Won(CellCount),
}

impl OpenOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won(_))
    }
}

/// One player's game from start to finish, and every game after it via [`GameSession::reset`].
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: PlayBoard,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a game on a fresh random board. Later resets draw their boards from the same seed.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Self::random_board(config, &mut rng);
        Self {
            config,
            board,
            status: GameStatus::InProgress,
            triggered_mine: None,
            rng,
        }
    }

    /// Starts a game on a fixed layout, later resets go random with the same shape.
    pub fn from_layout(layout: MineLayout) -> Self {
        Self {
            config: layout.game_config(),
            board: PlayBoard::new(layout),
            status: GameStatus::InProgress,
            triggered_mine: None,
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &PlayBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.board.flagged_count())
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_session(self)
    }

    /// Throws the current board away and deals a new one.
    pub fn reset(&mut self) {
        self.board = Self::random_board(self.config, &mut self.rng);
        self.status = GameStatus::InProgress;
        self.triggered_mine = None;
        log::debug!("Session reset, {:?}", self.config);
    }

    /// Flips the flag on a hidden cell and returns whether it is now flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        self.check_in_progress()?;
        let flagged = self.board.toggle_flag(coords)?;
        log::debug!("Flag at {:?} is now {}", coords, flagged);
        Ok(flagged)
    }

    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        self.check_in_progress()?;

        Ok(match self.board.open_cell(coords)? {
            OpenResult::HitMine => {
                self.triggered_mine = Some(coords);
                self.end_game(GameStatus::Lost);
                OpenOutcome::HitMine
            }
            OpenResult::Opened(count) if self.check_win() => {
                self.end_game(GameStatus::Won);
                OpenOutcome::Won(count)
            }
            OpenResult::Opened(count) => OpenOutcome::Revealed(count),
        })
    }

    /// Whether every cell that is not a mine has been revealed.
    pub fn check_win(&self) -> bool {
        self.board.all_safe_revealed()
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        log::debug!(
            "Game ended {:?}, revealed {} of {} safe cells",
            status,
            self.board.revealed_count(),
            self.config.safe_cells()
        );
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::GameAlreadyOver)
        }
    }

    fn random_board(config: GameConfig, rng: &mut SmallRng) -> PlayBoard {
        let layout = RandomMinefieldGenerator::new(rng.random()).generate(config);
        PlayBoard::new(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord, mines: &[Coord2]) -> GameSession {
        GameSession::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn safe_cells(session: &GameSession) -> Vec<Coord2> {
        session
            .board()
            .hints()
            .iter()
            .filter(|&(_, hint)| !hint.is_mine())
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn hitting_mine_loses_and_remembers_it() {
        let mut session = session(3, &[(0, 0)]);

        assert_eq!(session.open((0, 0)), Ok(OpenOutcome::HitMine));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.triggered_mine(), Some((0, 0)));
    }

    #[test]
    fn revealing_last_safe_cell_wins() {
        let mut session = session(2, &[(0, 0)]);

        assert_eq!(session.open((0, 1)), Ok(OpenOutcome::Revealed(1)));
        assert_eq!(session.open((1, 0)), Ok(OpenOutcome::Revealed(1)));
        assert!(!session.check_win());
        assert_eq!(session.open((1, 1)), Ok(OpenOutcome::Won(1)));
        assert!(session.check_win());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.triggered_mine(), None);
    }

    #[test]
    fn flood_fill_can_win_in_one_move() {
        let mut session = session(3, &[(2, 2)]);

        assert_eq!(session.open((0, 0)), Ok(OpenOutcome::Won(8)));
    }

    #[test]
    fn finished_game_rejects_moves_without_changes() {
        let mut session = session(3, &[(0, 0)]);
        session.open((0, 0)).unwrap();
        let revealed = session.board().revealed_count();

        assert_eq!(session.open((2, 2)), Err(GameError::GameAlreadyOver));
        assert_eq!(session.toggle_flag((2, 2)), Err(GameError::GameAlreadyOver));
        assert_eq!(session.board().revealed_count(), revealed);
        assert!(!session.board().is_flagged((2, 2)));
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn won_game_is_frozen_too() {
        let mut session = session(2, &[(0, 0)]);
        for coords in [(0, 1), (1, 0), (1, 1)] {
            session.open(coords).unwrap();
        }

        assert_eq!(session.toggle_flag((0, 0)), Err(GameError::GameAlreadyOver));
        assert_eq!(session.open((0, 0)), Err(GameError::GameAlreadyOver));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn toggle_flag_reports_new_state() {
        let mut session = session(3, &[(0, 0)]);

        assert_eq!(session.toggle_flag((0, 0)), Ok(true));
        assert_eq!(session.mines_left(), 0);
        assert_eq!(session.toggle_flag((0, 0)), Ok(false));
        assert_eq!(session.mines_left(), 1);
    }

    #[test]
    fn mines_left_goes_negative_when_over_flagged() {
        let mut session = session(3, &[(0, 0)]);
        session.toggle_flag((1, 1)).unwrap();
        session.toggle_flag((2, 2)).unwrap();

        assert_eq!(session.mines_left(), -1);
    }

    #[test]
    fn reset_leaves_final_state_with_fresh_board() {
        let mut session = GameSession::new(GameConfig::default(), 9);
        let mines: Vec<_> = session.board().layout().iter_mines().collect();
        session.toggle_flag(mines[1]).unwrap();
        session.open(mines[0]).unwrap();
        assert_eq!(session.status(), GameStatus::Lost);

        session.reset();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.triggered_mine(), None);
        assert_eq!(session.board().revealed_count(), 0);
        assert_eq!(session.board().flagged_count(), 0);
        assert_eq!(session.board().layout().mine_count(), 10);
    }

    #[test]
    fn seeded_sessions_replay_the_same_boards() {
        let mut a = GameSession::new(GameConfig::default(), 1234);
        let mut b = GameSession::new(GameConfig::default(), 1234);
        assert_eq!(a.board(), b.board());

        a.reset();
        b.reset();
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn lost_game_is_not_a_win_with_one_safe_cell_left() {
        let mut session = session(2, &[(0, 0)]);
        session.open((0, 1)).unwrap();
        session.open((1, 0)).unwrap();

        assert_eq!(session.open((0, 0)), Ok(OpenOutcome::HitMine));
        assert!(session.is_finished());
        assert!(!session.board().is_revealed((1, 1)));
        assert_eq!(session.board().revealed_count(), 2);
        assert!(!session.check_win());
    }

    #[test]
    fn win_iff_all_safe_cells_revealed() {
        let mut session = GameSession::new(GameConfig::default(), 77);
        let cells = safe_cells(&session);
        assert_eq!(cells.len(), 54);

        for coords in cells {
            if session.board().is_revealed(coords) {
                continue;
            }
            assert!(!session.check_win());
            session.open(coords).unwrap();
            assert_eq!(
                session.check_win(),
                session.board().revealed_count() == 54
            );
        }

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.board().revealed_count(), 54);
    }
}
