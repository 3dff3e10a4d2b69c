//! Account endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, NewAccount};
use crate::session::CredentialStore;

#[cfg(target_arch = "wasm32")]
impl<S: CredentialStore> ApiClient<S> {
    /// `POST /auth/login/`: exchange credentials for the user and token.
    /// The caller stores both in the session on success.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login/", credentials).await
    }

    /// `POST /auth/register/`. The response body is unused; any 2xx is
    /// success and the caller proceeds to the login screen.
    pub async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.post_no_content("/auth/register/", account).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<S: CredentialStore> ApiClient<S> {
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let _ = credentials;
        Err(crate::client::browser_only())
    }

    pub async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        let _ = account;
        Err(crate::client::browser_only())
    }
}
