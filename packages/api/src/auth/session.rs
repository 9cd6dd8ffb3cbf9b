//! # Session manager
//!
//! [`SessionManager`] wraps a [`SessionStore`] and answers "is the current
//! viewer signed in, and as whom?". It re-reads the store on every call, so a
//! sign-out in one view is seen by the next protected mount.
//!
//! | Method | Mutates | Description |
//! |--------|---------|-------------|
//! | [`load_session`](SessionManager::load_session) | no | Stored token if it has the three-segment shape. |
//! | [`validate`](SessionManager::validate) | no | Classifies the stored token as valid, absent, malformed or expired. |
//! | [`current_username`](SessionManager::current_username) | no | Username of a valid, unexpired session. |
//! | [`require`](SessionManager::require) | on failure | Protected-page guard; clears the store unless the session is valid. |
//! | [`establish`](SessionManager::establish) | yes | Stores a new token, replacing the old one. |
//! | [`clear`](SessionManager::clear) | yes | Signs out. |

use store::SessionStore;

use super::claims::{self, Claims, DecodeError};

/// A stored token with the structural shape of a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

impl Session {
    pub fn decode(&self) -> Result<Claims, DecodeError> {
        claims::decode(&self.token)
    }
}

/// A session that passed the guard: decoded and unexpired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub token: String,
    pub claims: Claims,
}

impl AuthenticatedSession {
    pub fn username(&self) -> &str {
        &self.claims.username
    }
}

/// Outcome of checking the stored session at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Valid(AuthenticatedSession),
    /// Nothing stored, or not three segments.
    Absent,
    /// Three segments, but the payload does not decode.
    Malformed,
    Expired(Claims),
}

/// Client-side session lifecycle over an injectable store.
#[derive(Debug, Clone)]
pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token, or `None` if absent or not token-shaped.
    pub fn load_session(&self) -> Option<Session> {
        let token = self.store.load()?;
        if claims::has_token_shape(&token) {
            Some(Session { token })
        } else {
            None
        }
    }

    /// Classify the stored session at time `now` (Unix seconds).
    pub fn validate(&self, now: i64) -> SessionStatus {
        let Some(session) = self.load_session() else {
            return SessionStatus::Absent;
        };
        match session.decode() {
            Ok(claims) if claims.is_expired(now) => SessionStatus::Expired(claims),
            Ok(claims) => SessionStatus::Valid(AuthenticatedSession {
                token: session.token,
                claims,
            }),
            Err(e) => {
                tracing::debug!("Stored session does not decode: {}", e);
                SessionStatus::Malformed
            }
        }
    }

    /// Username of a valid session at time `now`.
    pub fn current_username(&self, now: i64) -> Option<String> {
        match self.validate(now) {
            SessionStatus::Valid(session) => Some(session.claims.username),
            _ => None,
        }
    }

    /// Guard for protected pages. Anything but a valid session clears the
    /// store so a stale token is never sent.
    pub fn require(&self, now: i64) -> Option<AuthenticatedSession> {
        match self.validate(now) {
            SessionStatus::Valid(session) => Some(session),
            status => {
                tracing::debug!("Session rejected: {:?}", status);
                self.clear();
                None
            }
        }
    }

    /// Persist `token` as the current session.
    pub fn establish(&self, token: &str) {
        self.store.save(token);
        tracing::info!("Session established");
    }

    /// Sign out.
    pub fn clear(&self) {
        self.store.clear();
        tracing::info!("Session cleared");
    }
}
