//! Client-side session handling: token claims and the session manager.

mod claims;
mod session;

pub use claims::{decode, has_token_shape, Claims, DecodeError};
pub use session::{AuthenticatedSession, Session, SessionManager, SessionStatus};

/// Current wall-clock time as Unix seconds.
pub fn current_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
