use api::Book;
use dioxus::prelude::*;

/// Catalog card shared by the book list and the reading list. The caller
/// supplies its own actions row (detail link, remove button, ...).
#[component]
pub fn BookCard(book: Book, actions: Element) -> Element {
    rsx! {
        div {
            class: "book-card",
            div {
                class: "book-card-body",
                div {
                    class: "book-card-rating",
                    span { class: "book-card-average", {format!("{:.1}/10", book.average_rating)} }
                    span { class: "book-card-count", "{book.total_ratings} ratings" }
                }
                h2 { class: "book-card-title", "{book.title}" }
                p { class: "book-card-author", "by {book.author}" }
                p { class: "book-card-genre", "Genre: {book.genre}" }
                p { class: "book-card-about", "{book.about}" }
            }
            div {
                class: "book-card-actions",
                {actions}
            }
        }
    }
}
