//! Session Management
//!
//! Session registry for streaming-transport connections. A session is
//! created when an `initialize` call arrives without a session header,
//! and removed by an explicit termination request. The registry is the
//! only mutable shared state in the transport; `DashMap` provides the
//! mutual exclusion around insert and remove.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use dashmap::DashMap;
use rand::RngCore;
use std::time::Instant;

use crate::constants::SESSION_ID_BYTES;

/// Session registry keyed by generated identifier
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionContext>,
}

/// Context for a single client session
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Unique session identifier
    pub id: String,

    /// When this session was created
    pub created_at: Instant,

    /// Last access time
    pub last_access: Instant,
}

impl SessionContext {
    fn new(id: String) -> Self {
        let now = Instant::now();
        Self {
            id,
            created_at: now,
            last_access: now,
        }
    }
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create and register a new session
    ///
    /// Identifiers are 256 bits of randomness, URL-safe encoded. A
    /// generated identifier that is still registered is never handed
    /// out again; the loop below makes that invariant explicit even
    /// though a collision is not expected within the lifetime of a
    /// process.
    pub fn create(&self) -> SessionContext {
        let id = loop {
            let candidate = generate_session_id();
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        let context = SessionContext::new(id.clone());
        self.sessions.insert(id, context.clone());
        context
    }

    /// Get a session context if it exists
    pub fn get(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Update the last access time of a session
    ///
    /// Returns `false` when the session is not registered; callers on
    /// the request path tolerate that (session-less operation).
    pub fn touch(&self, session_id: &str) -> bool {
        match self.sessions.get_mut(session_id) {
            Some(mut entry) => {
                entry.last_access = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Remove a session
    pub fn remove(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Get the number of active sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove sessions idle longer than the given duration
    pub fn remove_stale(&self, max_age: std::time::Duration) {
        let now = Instant::now();
        self.sessions
            .retain(|_, ctx| now.duration_since(ctx.last_access) < max_age);
    }
}

/// Generate a URL-safe session identifier with 256 bits of randomness
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
