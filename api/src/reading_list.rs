//! The current user's reading list.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::ReadingListEntry;
use crate::session::CredentialStore;

#[cfg(target_arch = "wasm32")]
impl<S: CredentialStore> ApiClient<S> {
    /// `GET /reading-list/`
    pub async fn list_reading_list(&self) -> Result<Vec<ReadingListEntry>, ApiError> {
        self.get("/reading-list/").await
    }

    /// `POST /reading-list/add/{bookId}/`
    pub async fn add_to_reading_list(&self, book_id: i64) -> Result<(), ApiError> {
        self.post_empty(&format!("/reading-list/add/{book_id}/")).await
    }

    /// `DELETE /reading-list/remove/{bookId}/`
    pub async fn remove_from_reading_list(&self, book_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/reading-list/remove/{book_id}/")).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<S: CredentialStore> ApiClient<S> {
    pub async fn list_reading_list(&self) -> Result<Vec<ReadingListEntry>, ApiError> {
        Err(crate::client::browser_only())
    }

    pub async fn add_to_reading_list(&self, book_id: i64) -> Result<(), ApiError> {
        let _ = book_id;
        Err(crate::client::browser_only())
    }

    pub async fn remove_from_reading_list(&self, book_id: i64) -> Result<(), ApiError> {
        let _ = book_id;
        Err(crate::client::browser_only())
    }
}
