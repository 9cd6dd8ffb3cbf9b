//! Login page view with username/password form.

use api::current_timestamp;
use api::pages::login::{self, LoginForm};
use dioxus::prelude::*;

use crate::{use_app, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the list
    let check = app.clone();
    use_effect(move || {
        if let Some(dest) = login::redirect_if_signed_in(&check.session, current_timestamp()) {
            nav.replace(Route::from(dest));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = LoginForm {
                username: username(),
                password: password(),
            };
            match login::login(&app.client, &app.session, &form).await {
                Ok(dest) => {
                    nav.push(Route::from(dest));
                }
                Err(msg) => {
                    loading.set(false);
                    error.set(Some(msg));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Welcome Back" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    input {
                        r#type: "text",
                        placeholder: "Username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Log In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don’t have an account? "
                    Link { to: Route::Signup {}, "Sign Up" }
                }
            }
        }
    }
}
