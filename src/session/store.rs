// src/session/store.rs
use crate::session::state::SessionState;
use crate::session::token::{generate_session_token, looks_like_token};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// In-process session map keyed by the cookie token.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionState>>,
    idle_secs: i64,
    max_sessions: usize,
}

/// Result of resolving a request's cookie to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub token: String,
    /// True when the token was minted for this request and needs a
    /// `Set-Cookie`.
    pub is_new: bool,
}

impl SessionStore {
    pub fn new(idle_secs: i64, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_secs,
            max_sessions: max_sessions.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionState>> {
        // A panic mid-request leaves plain data behind; keep serving.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Find the live session for `cookie_token`, or start a new one.
    pub fn resolve(&self, cookie_token: Option<&str>, now: i64) -> SessionKey {
        let mut map = self.lock();

        if let Some(token) = cookie_token.filter(|t| looks_like_token(t)) {
            if let Some(state) = map.get_mut(token) {
                if now - state.last_seen <= self.idle_secs {
                    state.touch(now);
                    return SessionKey {
                        token: token.to_string(),
                        is_new: false,
                    };
                }
                map.remove(token);
            }
        }

        let before = map.len();
        map.retain(|_, s| now - s.last_seen <= self.idle_secs);
        if map.len() < before {
            debug!(expired = before - map.len(), "Swept idle sessions");
        }

        // Cookieless clients mint a session per request; the oldest go first.
        while map.len() >= self.max_sessions {
            let Some(oldest) = map
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(token, _)| token.clone())
            else {
                break;
            };
            map.remove(&oldest);
            debug!(cap = self.max_sessions, "Evicted least recently seen session");
        }

        let token = generate_session_token();
        map.insert(token.clone(), SessionState::new(now));
        debug!(active = map.len(), "Session started");

        SessionKey {
            token,
            is_new: true,
        }
    }

    /// Run `f` against the session's state. A key that vanished in between
    /// (swept by another request) gets a fresh state.
    pub fn with_session<T>(
        &self,
        key: &SessionKey,
        now: i64,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> T {
        let mut map = self.lock();
        let state = map
            .entry(key.token.clone())
            .or_insert_with(|| SessionState::new(now));
        f(state)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
