use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AppContext, Route};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Same shell as desktop: token file in the app data dir
    use_context_provider(|| {
        let config = ui::load_config();
        tracing::info!("Using API at {}", config.api.base_url);
        AppContext::new(ui::make_session_store(&config), &config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}
