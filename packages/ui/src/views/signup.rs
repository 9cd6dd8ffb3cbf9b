//! Signup page view.

use api::current_timestamp;
use api::pages::login::redirect_if_signed_in;
use api::pages::signup::{self, SignupForm};
use dioxus::prelude::*;

use crate::{use_app, Route};

#[component]
pub fn Signup() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let check = app.clone();
    use_effect(move || {
        if let Some(dest) = redirect_if_signed_in(&check.session, current_timestamp()) {
            nav.replace(Route::from(dest));
        }
    });

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = SignupForm {
                username: username(),
                password: password(),
            };
            match signup::signup(&app.client, &app.session, &form).await {
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
                h2 { "Create Your Account" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_signup,
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
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log In" }
                }
            }
        }
    }
}
