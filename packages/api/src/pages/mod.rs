//! # Page controllers
//!
//! One module per page. Each controller runs the page's flow to completion:
//! guard the session, call the service, and end in either a [`Destination`]
//! to navigate to or a single message for the viewer. Raw [`ApiError`]s
//! never leave this module.
//!
//! Protected flows call [`require_session`] first, so a viewer without a
//! valid session is sent to the login page before any authorized request
//! is made.

use store::SessionStore;

use crate::auth::{AuthenticatedSession, SessionManager};
use crate::error::ApiError;

pub mod apartments;
pub mod create;
pub mod detail;
pub mod login;
pub mod signup;

/// Where a controller wants the viewer to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Signup,
    Apartments,
    CreateApartment,
    Apartment(String),
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::Login => "/authentication/login".to_string(),
            Destination::Signup => "/authentication/signup".to_string(),
            Destination::Apartments => "/apartments".to_string(),
            Destination::CreateApartment => "/apartments/create".to_string(),
            Destination::Apartment(id) => format!("/apartments/{id}"),
        }
    }
}

/// A protected flow that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Navigate away, typically to the login page.
    Redirect(Destination),
    /// Stay and show this message.
    Message(String),
}

pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOAD_LIST_FAILED: &str = "Failed to load apartments";
pub const LOAD_ONE_FAILED: &str = "Failed to load apartment";
pub const CREATE_FAILED: &str = "Failed to create apartment";
pub const DELETE_FAILED: &str = "Error deleting apartment";
pub const DELETED: &str = "Apartment deleted successfully!";

/// Session guard for protected pages.
pub fn require_session<S: SessionStore>(
    session: &SessionManager<S>,
    now: i64,
) -> Result<AuthenticatedSession, PageError> {
    session
        .require(now)
        .ok_or(PageError::Redirect(Destination::Login))
}

/// Convert a service failure into what the page shows. A refused token
/// means the session is dead: clear it and go to login.
fn page_error<S: SessionStore>(
    session: &SessionManager<S>,
    err: ApiError,
    message: &str,
) -> PageError {
    match err {
        ApiError::Unauthorized => {
            tracing::info!("Server refused session token");
            session.clear();
            PageError::Redirect(Destination::Login)
        }
        err => {
            tracing::warn!("{}: {}", message, err);
            PageError::Message(message.to_string())
        }
    }
}
