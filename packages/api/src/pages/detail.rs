//! Apartment detail page flow: view and delete.

use store::{Apartment, SessionStore};

use super::{
    page_error, require_session, Destination, PageError, DELETED, DELETE_FAILED, LOAD_ONE_FAILED,
};
use crate::auth::SessionManager;
use crate::service::ApartmentService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage {
    Found(Apartment),
    NotFound,
}

/// A completed delete: where to go, and the notice to show there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub next: Destination,
    pub notice: &'static str,
}

pub async fn load_apartment<R: ApartmentService, S: SessionStore>(
    records: &R,
    session: &SessionManager<S>,
    id: &str,
    now: i64,
) -> Result<DetailPage, PageError> {
    let auth = require_session(session, now)?;
    match records.get(&auth.token, id).await {
        Ok(apartment) => Ok(DetailPage::Found(apartment)),
        Err(e) if e.is_not_found() => Ok(DetailPage::NotFound),
        Err(e) => Err(page_error(session, e, LOAD_ONE_FAILED)),
    }
}

/// Delete one apartment and return to the list with a confirmation. On
/// failure nothing changes on the page except the message.
pub async fn delete_apartment<R: ApartmentService, S: SessionStore>(
    records: &R,
    session: &SessionManager<S>,
    id: &str,
    now: i64,
) -> Result<Deleted, PageError> {
    let auth = require_session(session, now)?;
    match records.delete(&auth.token, id).await {
        Ok(()) => {
            tracing::info!("Deleted apartment {}", id);
            Ok(Deleted {
                next: Destination::Apartments,
                notice: DELETED,
            })
        }
        Err(e) => Err(page_error(session, e, DELETE_FAILED)),
    }
}
