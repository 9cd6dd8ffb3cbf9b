use api::Destination;
use dioxus::prelude::*;

use crate::views::{ApartmentDetail, ApartmentList, CreateApartment, Home, Login, Signup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/authentication/login")]
    Login {},
    #[route("/authentication/signup")]
    Signup {},
    #[route("/apartments")]
    ApartmentList {},
    #[route("/apartments/create")]
    CreateApartment {},
    #[route("/apartments/:id")]
    ApartmentDetail { id: String },
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Home => Route::Home {},
            Destination::Login => Route::Login {},
            Destination::Signup => Route::Signup {},
            Destination::Apartments => Route::ApartmentList {},
            Destination::CreateApartment => Route::CreateApartment {},
            Destination::Apartment(id) => Route::ApartmentDetail { id },
        }
    }
}
