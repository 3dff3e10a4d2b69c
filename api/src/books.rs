//! Catalog queries and ratings.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Book;
use crate::session::CredentialStore;

/// Sort keys accepted by `GET /books/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Author,
    PublicationDate,
    AverageRating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::PublicationDate => "publication_date",
            SortKey::AverageRating => "average_rating",
        }
    }

    /// Parse a select-control value, falling back to the default.
    pub fn from_param(value: &str) -> Self {
        match value {
            "author" => SortKey::Author,
            "publication_date" => SortKey::PublicationDate,
            "average_rating" => SortKey::AverageRating,
            _ => SortKey::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Filter and sort state for the catalog. Filters are matched as
/// case-insensitive substrings by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookQuery {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl BookQuery {
    /// Query pairs for `GET /books/`. Blank filters are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize)]
struct RatingBody {
    rating: u8,
}

/// Reject out-of-range ratings before any request is issued. Values are
/// never clamped; backend validation remains authoritative.
fn validate_rating(rating: u8) -> Result<(), ApiError> {
    if !(1..=10).contains(&rating) {
        return Err(ApiError::validation(
            "rating",
            "rating must be between 1 and 10",
        ));
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
impl<S: CredentialStore> ApiClient<S> {
    /// `GET /books/` with the query's filter and sort parameters.
    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        self.get_with_query("/books/", &query.to_pairs()).await
    }

    /// `GET /books/{id}/`
    pub async fn get_book(&self, id: i64) -> Result<Book, ApiError> {
        self.get(&format!("/books/{id}/")).await
    }

    /// `POST /books/{id}/rate/`. The caller re-fetches the book afterwards
    /// to pick up the updated aggregates.
    pub async fn rate_book(&self, book_id: i64, rating: u8) -> Result<(), ApiError> {
        validate_rating(rating)?;
        self.post_no_content(&format!("/books/{book_id}/rate/"), &RatingBody { rating })
            .await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<S: CredentialStore> ApiClient<S> {
    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        let _ = query;
        Err(crate::client::browser_only())
    }

    pub async fn get_book(&self, id: i64) -> Result<Book, ApiError> {
        let _ = id;
        Err(crate::client::browser_only())
    }

    pub async fn rate_book(&self, book_id: i64, rating: u8) -> Result<(), ApiError> {
        validate_rating(rating)?;
        let _ = book_id;
        Err(crate::client::browser_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, Session};

    #[test]
    fn default_query_sorts_by_title_ascending() {
        assert_eq!(
            BookQuery::default().to_pairs(),
            vec![
                ("sort", "title".to_string()),
                ("order", "asc".to_string())
            ]
        );
    }

    #[test]
    fn filters_appear_and_blanks_are_omitted() {
        let query = BookQuery {
            title: "Dune".to_string(),
            author: "   ".to_string(),
            genre: String::new(),
            sort: SortKey::Author,
            order: SortOrder::Descending,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("title", "Dune".to_string()),
                ("sort", "author".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn sort_params_roundtrip_from_select_values() {
        assert_eq!(SortKey::from_param("average_rating"), SortKey::AverageRating);
        assert_eq!(SortKey::from_param("publication_date"), SortKey::PublicationDate);
        assert_eq!(SortKey::from_param("bogus"), SortKey::Title);
        assert_eq!(SortOrder::from_param("desc"), SortOrder::Descending);
        assert_eq!(SortOrder::from_param("asc"), SortOrder::Ascending);
    }

    #[test]
    fn out_of_range_ratings_are_rejected_not_clamped() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(11).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(10).is_ok());
    }

    #[tokio::test]
    async fn rating_validation_runs_before_any_request() {
        let client = ApiClient::new("http://backend/api", Session::new(MemoryStore::new()));
        let err = client.rate_book(1, 11).await.unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().field("rating"),
            ["rating must be between 1 and 10"]
        );
    }
}
