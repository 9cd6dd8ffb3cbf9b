use dioxus::prelude::*;

/// Page header with a title, the signed-in username and action buttons.
#[component]
pub fn Navbar(title: String, username: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                if let Some(name) = &username {
                    span { class: "navbar-user", "{name}" }
                }
                {children}
            }
        }
    }
}
