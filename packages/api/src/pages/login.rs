//! Login page flow.

use store::SessionStore;

use super::{Destination, LOGIN_FAILED};
use crate::auth::SessionManager;
use crate::service::AuthService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Log in and store the issued token. On failure the message is generic
/// and the stored session is left as it was.
pub async fn login<A: AuthService, S: SessionStore>(
    auth: &A,
    session: &SessionManager<S>,
    form: &LoginForm,
) -> Result<Destination, String> {
    match auth.login(&form.username, &form.password).await {
        Ok(token) => {
            session.establish(&token);
            Ok(Destination::Apartments)
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Err(LOGIN_FAILED.to_string())
        }
    }
}

/// Login and signup pages send a signed-in viewer straight to the list.
pub fn redirect_if_signed_in<S: SessionStore>(
    session: &SessionManager<S>,
    now: i64,
) -> Option<Destination> {
    session
        .current_username(now)
        .map(|_| Destination::Apartments)
}
