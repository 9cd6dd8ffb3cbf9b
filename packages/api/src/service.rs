//! Service traits for the two remote collaborators.
//!
//! Page controllers are generic over these so they run unchanged against
//! [`crate::ApiClient`] in the app and [`crate::mock::MockBackend`] in tests.

use std::future::Future;

use store::{Apartment, NewApartment};

use crate::error::ApiError;

/// Role assigned to accounts created through the signup page.
pub const DEFAULT_ROLE: &str = "user";

/// Authentication service.
pub trait AuthService {
    /// Exchange credentials for a session token.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;

    /// Create an account. Returns a token when the service signs the new
    /// account in directly.
    fn signup(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
}

/// Apartment record service. Every call carries the bearer token.
pub trait ApartmentService {
    fn list(&self, token: &str) -> impl Future<Output = Result<Vec<Apartment>, ApiError>>;

    fn get(&self, token: &str, id: &str) -> impl Future<Output = Result<Apartment, ApiError>>;

    fn create(
        &self,
        token: &str,
        apartment: &NewApartment,
    ) -> impl Future<Output = Result<Apartment, ApiError>>;

    fn delete(&self, token: &str, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}
