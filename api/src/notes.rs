//! Reviews attached to a book.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Note;
use crate::session::CredentialStore;

#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize)]
struct NoteBody<'a> {
    content: &'a str,
}

#[cfg(target_arch = "wasm32")]
impl<S: CredentialStore> ApiClient<S> {
    /// `GET /books/{id}/notes/`
    pub async fn list_notes(&self, book_id: i64) -> Result<Vec<Note>, ApiError> {
        self.get(&format!("/books/{book_id}/notes/")).await
    }

    /// `POST /books/{id}/notes/create/`
    pub async fn create_note(&self, book_id: i64, content: &str) -> Result<Note, ApiError> {
        self.post(&format!("/books/{book_id}/notes/create/"), &NoteBody { content })
            .await
    }

    /// `PUT /notes/{id}/update/`. Ownership is enforced by the backend.
    pub async fn update_note(&self, note_id: i64, content: &str) -> Result<Note, ApiError> {
        self.put(&format!("/notes/{note_id}/update/"), &NoteBody { content })
            .await
    }

    /// `DELETE /notes/{id}/delete/`
    pub async fn delete_note(&self, note_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/notes/{note_id}/delete/")).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<S: CredentialStore> ApiClient<S> {
    pub async fn list_notes(&self, book_id: i64) -> Result<Vec<Note>, ApiError> {
        let _ = book_id;
        Err(crate::client::browser_only())
    }

    pub async fn create_note(&self, book_id: i64, content: &str) -> Result<Note, ApiError> {
        let _ = (book_id, content);
        Err(crate::client::browser_only())
    }

    pub async fn update_note(&self, note_id: i64, content: &str) -> Result<Note, ApiError> {
        let _ = (note_id, content);
        Err(crate::client::browser_only())
    }

    pub async fn delete_note(&self, note_id: i64) -> Result<(), ApiError> {
        let _ = note_id;
        Err(crate::client::browser_only())
    }
}
