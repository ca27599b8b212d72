use core::fmt;
use hashbrown::HashMap;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::*;

/// Chat-side identifier of a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle to a session owned by a [`SessionRegistry`].
///
/// All access goes through [`SessionRef::with`], which holds the session's
/// own lock for the duration of the closure.
#[derive(Clone, Debug)]
pub struct SessionRef {
    player: PlayerId,
    session: Arc<Mutex<GameSession>>,
}

impl SessionRef {
    fn new(player: PlayerId, session: GameSession) -> Self {
        Self {
            player,
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn view(&self) -> BoardView {
        self.with(|session| session.view())
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().unwrap_or_else(|poisoned| {
            // every operation validates before writing, the session is still usable
            log::warn!("Recovering poisoned session of player {}", self.player);
            poisoned.into_inner()
        })
    }
}

/// Owns one [`GameSession`] per player.
///
/// The map lock is only held to look up or insert a handle, never while a
/// session is locked, so players never wait on each other's moves.
#[derive(Debug)]
pub struct SessionRegistry {
    config: GameConfig,
    sessions: RwLock<HashMap<PlayerId, SessionRef>>,
    seeds: Mutex<SmallRng>,
}

impl SessionRegistry {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Registry whose boards are reproducible for a given seed and order of player arrivals.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, seeds: SmallRng) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
            seeds: Mutex::new(seeds),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, player: PlayerId) -> Option<SessionRef> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&player)
            .cloned()
    }

    pub fn get_or_create(&self, player: PlayerId) -> SessionRef {
        if let Some(session) = self.get(player) {
            return session;
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        // another call may have inserted it between the two locks
        sessions
            .entry(player)
            .or_insert_with(|| {
                log::debug!("New session for player {}", player);
                SessionRef::new(player, GameSession::new(self.config, self.next_seed()))
            })
            .clone()
    }

    /// Discards the player's session, returns whether there was one.
    pub fn remove(&self, player: PlayerId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&player)
            .is_some()
    }

    /// Deals the player a fresh board, creating their session if needed.
    pub fn start(&self, player: PlayerId) -> BoardView {
        self.get_or_create(player).with(|session| {
            session.reset();
            session.view()
        })
    }

    pub fn toggle_flag(&self, player: PlayerId, coords: Coord2) -> Result<(bool, BoardView)> {
        self.active(player)?.with(|session| {
            let flagged = session.toggle_flag(coords)?;
            Ok((flagged, session.view()))
        })
    }

    pub fn open(&self, player: PlayerId, coords: Coord2) -> Result<(OpenOutcome, BoardView)> {
        self.active(player)?.with(|session| {
            let outcome = session.open(coords)?;
            if outcome.ends_game() {
                log::info!("Player {} finished a game: {:?}", player, outcome);
            }
            Ok((outcome, session.view()))
        })
    }

    pub fn view(&self, player: PlayerId) -> Result<BoardView> {
        Ok(self.active(player)?.view())
    }

    fn active(&self, player: PlayerId) -> Result<SessionRef> {
        self.get(player).ok_or(GameError::NoActiveGame)
    }

    fn next_seed(&self) -> u64 {
        self.seeds
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
