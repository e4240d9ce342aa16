//! Per-sender session storage.

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::game::{GameState, Step};
use crate::sync::Mutex;

/// A sender's conversation step and game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Conversation step.
    pub step: Step,
    /// Hands and chips.
    pub state: GameState,
}

/// Storage for sessions keyed by sender address.
///
/// Implementations only need to be correct for sequential access per address;
/// the [`Router`](crate::Router) never overlaps two events.
pub trait SessionStore {
    /// Returns the session for `address`, if any.
    fn get(&self, address: &str) -> Option<Session>;

    /// Stores `session` for `address`, replacing any previous one.
    fn set(&self, address: &str, session: Session);

    /// Forgets `address`. The next message starts a new session.
    fn delete(&self, address: &str);
}

/// Sessions held in process memory. Lost when the process exits.
pub struct MemorySessions {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Returns whether no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

impl Default for MemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessions {
    fn get(&self, address: &str) -> Option<Session> {
        self.sessions.lock().get(address).cloned()
    }

    fn set(&self, address: &str, session: Session) {
        self.sessions.lock().insert(address.to_string(), session);
    }

    fn delete(&self, address: &str) {
        self.sessions.lock().remove(address);
    }
}
