//! Landing page with links to signup and login.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "landing",
            div {
                class: "landing-card",
                h1 { "Find Your Perfect Place" }
                p { class: "landing-slogan", "“Because every address tells a story.”" }
                p {
                    class: "landing-text",
                    "Explore handpicked apartments in prime locations. "
                    "From modern city flats to peaceful retreats, your next chapter starts here."
                }
                div {
                    class: "landing-actions",
                    Link { to: Route::Signup {}, "Start Your Search" }
                    Link { to: Route::Login {}, "Member Login" }
                }
            }
        }
    }
}
