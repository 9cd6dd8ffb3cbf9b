//! Application context: the session manager and API client every view uses.

use std::rc::Rc;

use api::pages::apartments;
use api::{ApiClient, SessionManager};
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::Route;

/// The platform's session slot behind a shared handle.
pub type SharedStore = Rc<dyn SessionStore>;

/// Shared state provided once at the app root.
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionManager<SharedStore>,
    pub client: ApiClient,
    /// One-shot message carried across a navigation, shown by the next page.
    pub notice: Signal<Option<String>>,
}

impl AppContext {
    /// Must be called inside a component scope (`use_context_provider`).
    pub fn new(store: SharedStore, config: &ClientConfig) -> Self {
        Self {
            session: SessionManager::new(store),
            client: ApiClient::new(config.api.clone()),
            notice: Signal::new(None),
        }
    }
}

/// Get the application context provided at the root.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Button that clears the session and returns to the home page.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let nav = use_navigator();

    let onclick = move |_| {
        let dest = apartments::sign_out(&app.session);
        nav.push(Route::from(dest));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
