//! The configured HTTP client every backend call goes through.
//!
//! Two behaviors are composed around every request: on the way out the
//! stored token is attached as a bearer credential, and on the way in an
//! unauthorized response clears the session and sends the user back to the
//! login page, no matter which screen's call triggered it.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::{CredentialStore, Session};

/// Backend location. Override at build time with `BOOK_EXPLORER_API_URL`.
pub fn default_base_url() -> String {
    option_env!("BOOK_EXPLORER_API_URL")
        .unwrap_or("http://localhost:8000/api")
        .to_string()
}

/// Upper bound on any single request, so a stalled transport surfaces as a
/// failure instead of an indefinite loading state.
#[cfg(target_arch = "wasm32")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

/// HTTP client for the book catalog API.
///
/// Cheap to clone; the session handle is `Arc`-based.
#[derive(Clone, Debug)]
pub struct ApiClient<S: CredentialStore> {
    base_url: String,
    session: Session<S>,
}

impl<S: CredentialStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    /// The session this client attaches tokens from.
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// `Authorization` header value for the current session. `None` when
    /// logged out: the header is omitted entirely, never sent empty.
    fn bearer(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {token}"))
    }

    /// Classify a response. Runs for every call, so an expired token caught
    /// on any screen forces the logout and redirect.
    fn inspect<T: DeserializeOwned>(&self, status: u16, body: &str) -> Result<T, ApiError> {
        if (200..300).contains(&status) {
            return serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()));
        }
        Err(self.fail(status, body))
    }

    /// Like [`Self::inspect`], for endpoints whose response body is unused.
    fn inspect_no_content(&self, status: u16, body: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        Err(self.fail(status, body))
    }

    fn fail(&self, status: u16, body: &str) -> ApiError {
        let error = ApiError::from_response(status, body);
        if matches!(error, ApiError::Unauthorized) {
            tracing::warn!("authorization rejected, clearing session");
            self.session.logout();
            redirect_to_login();
        }
        error
    }
}

#[cfg(target_arch = "wasm32")]
impl<S: CredentialStore> ApiClient<S> {
    fn decorate(&self, request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.bearer() {
            Some(value) => request.header("Authorization", &value),
            None => request,
        }
    }

    /// Await the response, bounded by [`REQUEST_TIMEOUT`].
    async fn run<F>(&self, send: F) -> Result<(u16, String), ApiError>
    where
        F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
    {
        use futures::future::{select, Either};

        let send = std::pin::pin!(send);
        let deadline = std::pin::pin!(crate::coalesce::sleep(REQUEST_TIMEOUT));
        let response = match select(send, deadline).await {
            Either::Left((response, _)) => {
                response.map_err(|err| ApiError::Network(err.to_string()))?
            }
            Either::Right(_) => return Err(ApiError::Timeout),
        };
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.decorate(gloo_net::http::Request::get(&self.url(path)));
        let (status, body) = self.run(request.send()).await?;
        self.inspect(status, &body)
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .decorate(gloo_net::http::Request::get(&self.url(path)))
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        let (status, body) = self.run(request.send()).await?;
        self.inspect(status, &body)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .decorate(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let (status, body) = self.run(request.send()).await?;
        self.inspect(status, &body)
    }

    pub(crate) async fn post_no_content<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .decorate(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let (status, body) = self.run(request.send()).await?;
        self.inspect_no_content(status, &body)
    }

    /// POST without a body, for endpoints addressed purely by path.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self.decorate(gloo_net::http::Request::post(&self.url(path)));
        let (status, body) = self.run(request.send()).await?;
        self.inspect_no_content(status, &body)
    }

    pub(crate) async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .decorate(gloo_net::http::Request::put(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let (status, body) = self.run(request.send()).await?;
        self.inspect(status, &body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.decorate(gloo_net::http::Request::delete(&self.url(path)));
        let (status, body) = self.run(request.send()).await?;
        self.inspect_no_content(status, &body)
    }
}

/// Stub failure for native builds; the send path only exists in the
/// browser.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn browser_only() -> ApiError {
    ApiError::Network("HTTP requests are only available in the browser".to_string())
}

/// Hard navigation to the login entry point after a forced logout.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, UserSummary};
    use crate::session::{MemoryStore, TOKEN_KEY, USER_KEY};

    fn client() -> (ApiClient<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        (ApiClient::new("http://backend/api", session), store)
    }

    fn user() -> UserSummary {
        UserSummary {
            id: 7,
            username: "meri".to_string(),
        }
    }

    #[test]
    fn bearer_value_matches_held_token_exactly() {
        let (client, _) = client();
        assert_eq!(client.bearer(), None);
        client.session().login(user(), "tok-abc".to_string());
        assert_eq!(client.bearer().as_deref(), Some("Bearer tok-abc"));
    }

    #[test]
    fn unauthorized_response_clears_session_and_storage() {
        let (client, store) = client();
        client.session().login(user(), "expired".to_string());

        let result: Result<Book, ApiError> = client.inspect(401, "");
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!client.session().is_authenticated());
        assert!(store.read(TOKEN_KEY).is_none());
        assert!(store.read(USER_KEY).is_none());
    }

    #[test]
    fn success_decodes_payload_with_defaults() {
        let (client, _) = client();
        let book: Book = client
            .inspect(
                200,
                r#"{"id": 1, "title": "Dune", "author": "Frank Herbert",
                    "genre": "Science Fiction", "isbn": "9780441013593",
                    "page_count": 412, "publication_date": "1965-08-01"}"#,
            )
            .unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.average_rating, 0.0);
        assert_eq!(book.total_ratings, 0);
        assert_eq!(book.user_rating, None);
    }

    #[test]
    fn no_content_accepts_any_2xx() {
        let (client, _) = client();
        assert_eq!(client.inspect_no_content(204, ""), Ok(()));
        assert!(matches!(
            client.inspect_no_content(500, r#"{"error": "boom"}"#),
            Err(ApiError::Server { status: 500, .. })
        ));
    }

    #[test]
    fn url_joins_without_doubled_slash() {
        let (client, _) = client();
        assert_eq!(client.url("/books/"), "http://backend/api/books/");

        let with_slash =
            ApiClient::new("http://backend/api/", Session::new(MemoryStore::new()));
        assert_eq!(with_slash.url("/books/"), "http://backend/api/books/");
    }
}
