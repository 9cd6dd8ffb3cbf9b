//! Apartment list page flow.

use store::{Apartment, ApartmentQuery, SessionStore};

use super::{page_error, require_session, Destination, PageError, LOAD_LIST_FAILED};
use crate::auth::SessionManager;
use crate::service::ApartmentService;

/// Everything the list page renders from, besides its query state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub username: String,
    pub apartments: Vec<Apartment>,
}

impl ListPage {
    /// The filtered, ordered records for `query`.
    pub fn visible(&self, query: &ApartmentQuery) -> Vec<Apartment> {
        query.apply(&self.apartments)
    }
}

/// Guard the session, then fetch the full collection.
pub async fn load_apartments<R: ApartmentService, S: SessionStore>(
    records: &R,
    session: &SessionManager<S>,
    now: i64,
) -> Result<ListPage, PageError> {
    let auth = require_session(session, now)?;
    match records.list(&auth.token).await {
        Ok(apartments) => {
            tracing::debug!("Loaded {} apartments", apartments.len());
            Ok(ListPage {
                username: auth.claims.username,
                apartments,
            })
        }
        Err(e) => Err(page_error(session, e, LOAD_LIST_FAILED)),
    }
}

/// Clear the session and return to the home page.
pub fn sign_out<S: SessionStore>(session: &SessionManager<S>) -> Destination {
    session.clear();
    Destination::Home
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{make_token, MockBackend};
    use store::{MemoryStore, SortOption};

    fn apt(id: &str, name: &str, number: &str) -> Apartment {
        Apartment {
            id: id.to_string(),
            unit_name: name.to_string(),
            unit_number: number.to_string(),
            project: "Palm Hills".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_viewer_never_fetches() {
        let backend = MockBackend::new().with_apartments(vec![apt("1", "Loft", "A1")]);
        let store = MemoryStore::with_token("abc.def");
        let session = SessionManager::new(store.clone());

        let page = load_apartments(&backend, &session, 0).await;
        assert_eq!(page, Err(PageError::Redirect(Destination::Login)));
        assert!(backend.calls().is_empty());
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_before_fetch() {
        let backend = MockBackend::new();
        let store = MemoryStore::with_token(make_token("sam", Some(100)));
        let session = SessionManager::new(store.clone());

        let page = load_apartments(&backend, &session, 100).await;
        assert_eq!(page, Err(PageError::Redirect(Destination::Login)));
        assert!(backend.calls().is_empty());
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_load_sends_token_and_returns_records() {
        let token = make_token("sam", None);
        let backend = MockBackend::new().with_apartments(vec![
            apt("1", "Beta", "C120"),
            apt("2", "alpha", "B34"),
            apt("3", "Beta", "A12"),
        ]);
        let session = SessionManager::new(MemoryStore::with_token(token.clone()));

        let page = load_apartments(&backend, &session, 0).await.unwrap();
        assert_eq!(page.username, "sam");
        assert_eq!(page.apartments.len(), 3);
        assert_eq!(backend.calls()[0].token.as_deref(), Some(token.as_str()));

        let names: Vec<_> = page
            .visible(&ApartmentQuery::default())
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(names, vec!["2", "1", "3"]);

        let query = ApartmentQuery::new("12", "unitNumber-desc".parse::<SortOption>().unwrap());
        let ids: Vec<_> = page.visible(&query).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_load_failure_is_one_message() {
        let backend = MockBackend::new();
        backend.fail("list");
        let session = SessionManager::new(MemoryStore::with_token(make_token("sam", None)));

        let page = load_apartments(&backend, &session, 0).await;
        assert_eq!(page, Err(PageError::Message("Failed to load apartments".to_string())));
        // A server error is not a reason to sign out
        assert!(session.load_session().is_some());
    }

    #[tokio::test]
    async fn test_expired_token_from_login_is_dropped_on_next_load() {
        use crate::pages::login::{login, LoginForm};

        let backend = MockBackend::new()
            .with_user("sam", "hunter22")
            .with_token_exp(Some(500));
        let store = MemoryStore::new();
        let session = SessionManager::new(store.clone());

        let form = LoginForm {
            username: "sam".into(),
            password: "hunter22".into(),
        };
        assert_eq!(login(&backend, &session, &form).await, Ok(Destination::Apartments));
        assert!(store.load().is_some());

        let page = load_apartments(&backend, &session, 1_000).await;
        assert_eq!(page, Err(PageError::Redirect(Destination::Login)));
        assert!(store.load().is_none());
        // Only the login reached the backend
        let ops: Vec<_> = backend.calls().into_iter().map(|c| c.op).collect();
        assert_eq!(ops, vec!["login"]);
    }

    #[test]
    fn test_sign_out_clears_and_goes_home() {
        let store = MemoryStore::with_token(make_token("sam", None));
        let session = SessionManager::new(store.clone());
        assert_eq!(sign_out(&session), Destination::Home);
        assert!(store.load().is_none());
    }
}
