//! Create-apartment page flow.

use store::{NewApartment, SessionStore};

use super::{page_error, require_session, Destination, PageError, CREATE_FAILED};
use crate::auth::SessionManager;
use crate::service::ApartmentService;

/// Mount guard: a viewer without a valid session is sent to login before
/// the form is shown.
pub fn open<S: SessionStore>(session: &SessionManager<S>, now: i64) -> Result<(), PageError> {
    require_session(session, now).map(|_| ())
}

/// Submit the form. Required fields are checked before any request; the
/// caller keeps the form as entered whatever the outcome.
pub async fn create_apartment<R: ApartmentService, S: SessionStore>(
    records: &R,
    session: &SessionManager<S>,
    form: &NewApartment,
    now: i64,
) -> Result<Destination, PageError> {
    let auth = require_session(session, now)?;

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(PageError::Message(format!(
            "{} required",
            missing.join(", ")
        )));
    }

    match records.create(&auth.token, form).await {
        Ok(created) => {
            tracing::info!("Created apartment {:?}", created.id);
            Ok(Destination::Apartments)
        }
        Err(e) => Err(page_error(session, e, CREATE_FAILED)),
    }
}
