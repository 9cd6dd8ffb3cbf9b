use api::current_timestamp;
use api::pages::apartments::{self, ListPage};
use api::PageError;
use dioxus::prelude::*;
use store::{ApartmentQuery, SortOption};

use crate::{use_app, ApartmentCard, Navbar, QueryBar, Route, SignOutButton};

#[component]
pub fn ApartmentList() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut term = use_signal(String::new);
    let mut sort = use_signal(SortOption::default);
    let mut notice = app.notice;

    // Guard and fetch on every mount
    let page = use_resource(move || {
        let app = app.clone();
        async move {
            apartments::load_apartments(&app.client, &app.session, current_timestamp()).await
        }
    });

    use_effect(move || {
        if let Some(Err(PageError::Redirect(dest))) = &*page.read() {
            nav.replace(Route::from(dest.clone()));
        }
    });

    let state: Option<Result<ListPage, PageError>> = (*page.read()).clone();

    let body = match state {
        None => rsx! {
            div { class: "page-status", "Loading apartments..." }
        },
        // Navigation happens in the effect above
        Some(Err(PageError::Redirect(_))) => rsx! {},
        Some(Err(PageError::Message(msg))) => rsx! {
            div { class: "page-status page-status--error", "{msg}" }
        },
        Some(Ok(list)) => {
            let query = ApartmentQuery::new(term(), sort());
            let visible = list.visible(&query);
            let username = Some(list.username.clone()).filter(|name| !name.is_empty());

            rsx! {
                Navbar {
                    title: "🏢 Apartments",
                    username: username,
                    Link { to: Route::CreateApartment {}, "+ Add" }
                    SignOutButton { class: "secondary" }
                }

                if let Some(msg) = notice() {
                    div {
                        class: "page-notice",
                        span { "{msg}" }
                        button {
                            class: "secondary",
                            onclick: move |_| notice.set(None),
                            "Dismiss"
                        }
                    }
                }

                QueryBar {
                    term: term(),
                    sort: sort(),
                    on_term: move |value: String| term.set(value),
                    on_sort: move |opt: SortOption| sort.set(opt),
                }

                div {
                    class: "apartment-grid",
                    if visible.is_empty() {
                        div { class: "apartment-grid-empty", "No apartments match your search." }
                    } else {
                        for apartment in visible {
                            ApartmentCard { key: "{apartment.id}", apartment: apartment.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "apartments-page",
            {body}
        }
    }
}
