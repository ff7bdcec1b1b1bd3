//! GameLocks - One mutex per game
//!
//! Submissions to the same game run one at a time so that "one move per
//! player" and "resolve exactly once" hold; different games never wait on
//! each other. The outer map is only locked long enough to fetch the
//! game's mutex.
//!
//! Entries exist only for games that are still open. A finished game never
//! reopens, so its entry is released whenever a submission finds it finished.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jokenpo_domain::model::game::GameId;

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex guarding `game_id`, created on first use
    pub fn lock_for(&self, game_id: &GameId) -> Arc<Mutex<()>> {
        // The guarded values carry no state, so a poisoned lock is still usable.
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(game_id.clone()).or_default().clone()
    }

    /// Run `f` while holding the game's lock
    pub fn with_lock<T>(&self, game_id: &GameId, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(game_id);
        let _guard: MutexGuard<'_, ()> = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Forget the mutex of `game_id`.
    ///
    /// Only for games that can no longer change: a caller still holding the
    /// old mutex and a caller on a fresh one may then run side by side.
    pub fn release(&self, game_id: &GameId) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.remove(game_id);
    }

    /// Number of games with a live mutex
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
