use dioxus::prelude::*;
use store::Apartment;

use crate::Route;

/// One apartment in the list grid, linking to its detail page.
#[component]
pub fn ApartmentCard(apartment: Apartment) -> Element {
    rsx! {
        div {
            class: "apartment-card",
            Link {
                to: Route::ApartmentDetail { id: apartment.id.clone() },
                h2 { class: "apartment-card-title", "{apartment.unit_name}" }
                p {
                    class: "apartment-card-field",
                    span { class: "label", "Unit Number: " }
                    "{apartment.unit_number}"
                }
                p {
                    class: "apartment-card-field",
                    span { class: "label", "Project: " }
                    "{apartment.project}"
                }
                p { class: "apartment-card-description", "{apartment.description}" }
            }
        }
    }
}
