use api::ReadingListEntry;
use dioxus::prelude::*;
use ui::{use_client, Alert, AlertKind, BookCard, Spinner};

use crate::Route;

/// The signed-in user's saved books.
#[component]
pub fn ReadingList() -> Element {
    let client = use_client();
    let mut entries = use_signal(Vec::<ReadingListEntry>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<(AlertKind, String)>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                loading.set(true);
                match client.list_reading_list().await {
                    Ok(list) => {
                        entries.set(list);
                        error.set(None);
                    }
                    Err(_) => {
                        error.set(Some(
                            "Failed to fetch reading list. Please try again later.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_remove = {
        let client = client.clone();
        move |book_id: i64| {
            let client = client.clone();
            spawn(async move {
                match client.remove_from_reading_list(book_id).await {
                    Ok(()) => {
                        entries.write().retain(|entry| entry.book.id != book_id);
                        status.set(Some((
                            AlertKind::Success,
                            "Book successfully removed from your reading list!".to_string(),
                        )));
                    }
                    Err(_) => {
                        status.set(Some((
                            AlertKind::Error,
                            "Failed to remove book from reading list. Please try again."
                                .to_string(),
                        )));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "reading-list-page",
            h1 { "My Reading List" }

            if let Some((kind, message)) = status() {
                Alert { kind: kind, message: message }
            }

            if loading() {
                Spinner {}
            } else if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            } else if entries().is_empty() {
                Alert {
                    kind: AlertKind::Info,
                    message: "Your reading list is empty. Browse books to add some!",
                }
            } else {
                div {
                    class: "book-list",
                    for entry in entries() {
                        BookCard {
                            key: "{entry.id}",
                            book: entry.book.clone(),
                            actions: rsx! {
                                Link {
                                    class: "button-link",
                                    to: Route::BookDetail { id: entry.book.id },
                                    "View Details"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let handle = handle_remove.clone();
                                        let book_id = entry.book.id;
                                        move |_| handle(book_id)
                                    },
                                    "Remove from List"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
