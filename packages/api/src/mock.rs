//! In-memory stand-in for the apartments API, used by controller tests.
//!
//! [`MockBackend`] implements both service traits over shared state. Clones
//! share that state, so a test keeps one handle to inspect what the
//! controller did. Every call is recorded with the bearer token it carried.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use store::{Apartment, NewApartment};

use crate::error::ApiError;
use crate::service::{ApartmentService, AuthService};

/// Build an unsigned token whose payload is `{"username": .., "exp": ..}`.
pub fn make_token(username: &str, exp: Option<i64>) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = match exp {
        Some(exp) => serde_json::json!({ "username": username, "exp": exp }),
        None => serde_json::json!({ "username": username }),
    };
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.mock-signature")
}

/// One recorded service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: &'static str,
    pub token: Option<String>,
}

#[derive(Debug, Default)]
struct MockState {
    /// username -> (password, role)
    users: HashMap<String, (String, String)>,
    apartments: Vec<Apartment>,
    next_id: u64,
    token_exp: Option<i64>,
    signup_issues_token: bool,
    failing: Vec<&'static str>,
    calls: Vec<Call>,
}

#[derive(Clone, Debug, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.state.lock().unwrap().users.insert(
            username.to_string(),
            (password.to_string(), crate::service::DEFAULT_ROLE.to_string()),
        );
        self
    }

    pub fn with_apartments(self, apartments: Vec<Apartment>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = apartments.len() as u64;
            state.apartments = apartments;
        }
        self
    }

    /// Expiry stamped into tokens issued from now on.
    pub fn with_token_exp(self, exp: Option<i64>) -> Self {
        self.state.lock().unwrap().token_exp = exp;
        self
    }

    /// Make signup return a token, signing the new account in.
    pub fn with_signup_token(self) -> Self {
        self.state.lock().unwrap().signup_issues_token = true;
        self
    }

    /// Make every call to `op` fail with a 500.
    pub fn fail(&self, op: &'static str) {
        self.state.lock().unwrap().failing.push(op);
    }

    pub fn apartments(&self) -> Vec<Apartment> {
        self.state.lock().unwrap().apartments.clone()
    }

    pub fn role_of(&self, username: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .users
            .get(username)
            .map(|(_, role)| role.clone())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn begin(&self, op: &'static str, token: Option<&str>) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call {
            op,
            token: token.map(str::to_string),
        });
        if state.failing.contains(&op) {
            return Err(ApiError::Status {
                status: 500,
                message: format!("{op} failed"),
            });
        }
        if token.is_some_and(str::is_empty) {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

impl AuthService for MockBackend {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.begin("login", None)?;
        let state = self.state.lock().unwrap();
        match state.users.get(username) {
            Some((stored, _)) if stored == password => Ok(make_token(username, state.token_exp)),
            _ => Err(ApiError::Auth("invalid credentials".to_string())),
        }
    }

    async fn signup(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Option<String>, ApiError> {
        self.begin("signup", None)?;
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(username) {
            return Err(ApiError::Auth("username taken".to_string()));
        }
        state
            .users
            .insert(username.to_string(), (password.to_string(), role.to_string()));
        Ok(state
            .signup_issues_token
            .then(|| make_token(username, state.token_exp)))
    }
}

impl ApartmentService for MockBackend {
    async fn list(&self, token: &str) -> Result<Vec<Apartment>, ApiError> {
        self.begin("list", Some(token))?;
        Ok(self.apartments())
    }

    async fn get(&self, token: &str, id: &str) -> Result<Apartment, ApiError> {
        self.begin("get", Some(token))?;
        self.apartments()
            .into_iter()
            .find(|apt| apt.id == id)
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, token: &str, apartment: &NewApartment) -> Result<Apartment, ApiError> {
        self.begin("create", Some(token))?;
        if !apartment.missing_fields().is_empty() {
            return Err(ApiError::Validation("missing fields".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = Apartment {
            id: state.next_id.to_string(),
            unit_name: apartment.unit_name.clone(),
            unit_number: apartment.unit_number.clone(),
            project: apartment.project.clone(),
            description: apartment.description.clone(),
        };
        state.apartments.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.begin("delete", Some(token))?;
        let mut state = self.state.lock().unwrap();
        let before = state.apartments.len();
        state.apartments.retain(|apt| apt.id != id);
        if state.apartments.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
