mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod apartment_list;
pub use apartment_list::ApartmentList;

mod apartment_detail;
pub use apartment_detail::ApartmentDetail;

mod create_apartment;
pub use create_apartment::CreateApartment;
