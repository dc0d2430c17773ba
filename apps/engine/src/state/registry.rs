//! Session registry: one session per hosting channel, behind a single lock.
//!
//! Replaces a process-wide mutable session with an explicit map the command
//! layer owns and passes around. Commands run their whole compound sequence
//! (check player, draw week, tick projects, log) inside one
//! [`SessionRegistry::with_session`] call, so overlapping command handling
//! can never observe or interleave a half-applied mutation, and save/load
//! inside the closure is a critical section for free.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::GameSession;

/// Channel-keyed sessions under a single writer lock.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, GameSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the channel's session, creating it with `init` on first
    /// touch. The registry lock is held for the whole call.
    pub fn with_session<R>(
        &self,
        channel: &str,
        init: impl FnOnce() -> GameSession,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> R {
        let mut sessions = self.sessions.lock();
        let session = sessions.entry(channel.to_string()).or_insert_with(|| {
            tracing::debug!(%channel, "creating session");
            init()
        });
        f(session)
    }

    /// Replace the channel's session wholesale (reset, or snapshot load).
    pub fn replace(&self, channel: &str, session: GameSession) {
        tracing::debug!(%channel, "replacing session");
        self.sessions.lock().insert(channel.to_string(), session);
    }

    /// Drop the channel's session; returns whether one existed.
    pub fn remove(&self, channel: &str) -> bool {
        self.sessions.lock().remove(channel).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
