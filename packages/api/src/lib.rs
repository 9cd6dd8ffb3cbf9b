//! # API crate: session handling, REST client and page controllers
//!
//! This crate holds everything the apartments frontends do besides drawing:
//! deciding who is signed in, talking to the REST API, and running each
//! page's flow. The `ui` crate renders on top of it.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Token claims decoding and the [`SessionManager`] over a [`store::SessionStore`] |
//! | [`client`] | none | [`ApiClient`], the `reqwest` implementation of the service traits |
//! | [`error`] | none | [`ApiError`], the failure type of every service call |
//! | [`pages`] | none | Page controllers: login, signup, list, detail/delete, create, sign out |
//! | [`service`] | none | [`AuthService`] and [`ApartmentService`] traits |
//! | [`mock`] | `cfg(test)` | In-memory [`mock::MockBackend`] for tests |
//!
//! ## Flow
//!
//! A protected page calls its controller on mount. The controller re-reads
//! the stored token, clears it and redirects to login unless it decodes and
//! is unexpired, and only then calls the service with the bearer token.

pub mod auth;
pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod pages;
pub mod service;

pub use auth::{current_timestamp, AuthenticatedSession, Claims, SessionManager, SessionStatus};
pub use client::ApiClient;
pub use error::ApiError;
pub use pages::{Destination, PageError};
pub use service::{ApartmentService, AuthService};

pub use store::{Apartment, ApartmentQuery, NewApartment, SortOption};
