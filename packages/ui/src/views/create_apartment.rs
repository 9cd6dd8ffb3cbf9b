use api::current_timestamp;
use api::pages::create::{self, create_apartment};
use api::PageError;
use dioxus::prelude::*;
use store::NewApartment;

use crate::{use_app, Route};

/// Form for adding an apartment. Input survives a failed submit.
#[component]
pub fn CreateApartment() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut form = use_signal(NewApartment::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Protected page: checked once on mount, before the form is shown
    let guard = use_hook(|| create::open(&app.session, current_timestamp()));
    let redirect = guard.clone();
    use_effect(move || {
        if let Err(PageError::Redirect(dest)) = &redirect {
            nav.replace(Route::from(dest.clone()));
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let fields = form();
            match create_apartment(&app.client, &app.session, &fields, current_timestamp()).await {
                Ok(dest) | Err(PageError::Redirect(dest)) => {
                    nav.push(Route::from(dest));
                }
                Err(PageError::Message(msg)) => {
                    submitting.set(false);
                    error.set(Some(msg));
                }
            }
        });
    };

    if guard.is_err() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "create-apartment",
            h2 { "Add New Apartment" }

            form {
                onsubmit: handle_submit,
                class: "create-form",

                input {
                    r#type: "text",
                    name: "unitName",
                    placeholder: "Unit Name",
                    required: true,
                    value: "{form.read().unit_name}",
                    oninput: move |evt: FormEvent| form.write().unit_name = evt.value(),
                }
                input {
                    r#type: "text",
                    name: "unitNumber",
                    placeholder: "Unit Number",
                    required: true,
                    value: "{form.read().unit_number}",
                    oninput: move |evt: FormEvent| form.write().unit_number = evt.value(),
                }
                input {
                    r#type: "text",
                    name: "project",
                    placeholder: "Project Name",
                    required: true,
                    value: "{form.read().project}",
                    oninput: move |evt: FormEvent| form.write().project = evt.value(),
                }
                textarea {
                    name: "description",
                    placeholder: "Description",
                    rows: "4",
                    value: "{form.read().description}",
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }

                button {
                    r#type: "button",
                    class: "secondary",
                    onclick: move |_| {
                        nav.push(Route::ApartmentList {});
                    },
                    "← Back to List"
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: submitting(),
                    "Create Apartment"
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
            }
        }
    }
}
