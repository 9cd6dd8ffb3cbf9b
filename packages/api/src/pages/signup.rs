//! Signup page flow.

use store::SessionStore;

use super::{Destination, SIGNUP_FAILED};
use crate::auth::SessionManager;
use crate::service::{AuthService, DEFAULT_ROLE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

/// Create an account with the default role. If the service signs the new
/// account in, continue to the list; otherwise the viewer logs in next.
pub async fn signup<A: AuthService, S: SessionStore>(
    auth: &A,
    session: &SessionManager<S>,
    form: &SignupForm,
) -> Result<Destination, String> {
    match auth
        .signup(&form.username, &form.password, DEFAULT_ROLE)
        .await
    {
        Ok(Some(token)) => {
            session.establish(&token);
            Ok(Destination::Apartments)
        }
        Ok(None) => {
            tracing::info!("Account {} created", form.username);
            Ok(Destination::Login)
        }
        Err(e) => {
            tracing::warn!("Signup failed: {}", e);
            Err(SIGNUP_FAILED.to_string())
        }
    }
}
