//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod auth;
pub use auth::{use_app, AppContext, SharedStore, SignOutButton};

mod repo;
pub use repo::{load_config, make_session_store};

mod route;
pub use route::Route;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod apartment_card;
pub use apartment_card::ApartmentCard;

mod query_bar;
pub use query_bar::QueryBar;
