use api::current_timestamp;
use api::pages::detail::{self, DetailPage};
use api::PageError;
use dioxus::prelude::*;

use crate::{use_app, Route};

#[component]
pub fn ApartmentDetail(id: String) -> Element {
    // Track the id in a signal so the resource re-runs when the route param changes
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let app = use_app();
    let nav = use_navigator();
    let mut confirming = use_signal(|| false);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let loader = app.clone();
    let page = use_resource(move || {
        let app = loader.clone();
        let id = id_signal();
        async move { detail::load_apartment(&app.client, &app.session, &id, current_timestamp()).await }
    });

    let handle_delete = move |_| {
        if !confirming() {
            confirming.set(true);
            return;
        }
        let app = app.clone();
        let id = id_signal();
        spawn(async move {
            deleting.set(true);
            delete_error.set(None);
            match detail::delete_apartment(&app.client, &app.session, &id, current_timestamp()).await {
                Ok(deleted) => {
                    let mut notice = app.notice;
                    notice.set(Some(deleted.notice.to_string()));
                    nav.push(Route::from(deleted.next));
                }
                Err(PageError::Redirect(dest)) => {
                    nav.push(Route::from(dest));
                }
                Err(PageError::Message(msg)) => {
                    deleting.set(false);
                    confirming.set(false);
                    delete_error.set(Some(msg));
                }
            }
        });
    };

    use_effect(move || {
        if let Some(Err(PageError::Redirect(dest))) = &*page.read() {
            nav.replace(Route::from(dest.clone()));
        }
    });

    let state: Option<Result<DetailPage, PageError>> = (*page.read()).clone();

    match state {
        None => rsx! {
            p { class: "page-status", "Loading apartment details..." }
        },
        // Navigation happens in the effect above
        Some(Err(PageError::Redirect(_))) => rsx! {},
        Some(Err(PageError::Message(msg))) => rsx! {
            p { class: "page-status page-status--error", "{msg}" }
        },
        Some(Ok(DetailPage::NotFound)) => rsx! {
            p { class: "page-status page-status--error", "Apartment not found." }
        },
        Some(Ok(DetailPage::Found(apartment))) => {
            let description = apartment.description_or_placeholder().to_string();

            rsx! {
                div {
                    class: "apartment-detail",
                    h1 { "{apartment.unit_name}" }

                    div {
                        class: "apartment-detail-fields",
                        p {
                            span { class: "label", "🏠 Unit Number: " }
                            "{apartment.unit_number}"
                        }
                        p {
                            span { class: "label", "📍 Project: " }
                            "{apartment.project}"
                        }
                        p {
                            span { class: "label", "📝 Description: " }
                            "{description}"
                        }
                    }

                    if let Some(err) = delete_error() {
                        p { class: "form-error", "{err}" }
                    }

                    div {
                        class: "apartment-detail-actions",
                        button {
                            class: "secondary",
                            onclick: move |_| {
                                nav.push(Route::ApartmentList {});
                            },
                            "← Back to List"
                        }
                        button {
                            class: "danger",
                            disabled: deleting(),
                            onclick: handle_delete,
                            if confirming() { "Confirm delete?" } else { "🗑 Delete Apartment" }
                        }
                    }
                }
            }
        }
    }
}
