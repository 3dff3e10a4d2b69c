use api::{ApiError, Book, Note};
use dioxus::prelude::*;
use ui::icons::{FaPenToSquare, FaTrash};
use ui::{use_auth, use_client, Alert, AlertKind, Icon, RatingStars, Spinner};

/// Book header, rating, reading-list action and review thread.
#[component]
pub fn BookDetail(id: i64) -> Element {
    let client = use_client();
    let auth = use_auth();

    // Track the route param in a signal so the loader re-runs when it
    // changes.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut book = use_signal(|| Option::<Book>::None);
    let mut notes = use_signal(Vec::<Note>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut new_note = use_signal(String::new);
    let mut editing = use_signal(|| Option::<(i64, String)>::None);
    let mut status = use_signal(|| Option::<(AlertKind, String)>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                loading.set(true);
                error.set(None);
                status.set(None);
                editing.set(None);

                let fetched_book = client.get_book(id).await;
                let fetched_notes = client.list_notes(id).await;
                match (fetched_book, fetched_notes) {
                    (Ok(b), Ok(n)) => {
                        book.set(Some(b));
                        notes.set(n);
                    }
                    (Err(ApiError::NotFound), _) => {
                        error.set(Some("Book not found".to_string()));
                    }
                    _ => {
                        error.set(Some("Failed to fetch book details".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_rate = {
        let client = client.clone();
        move |value: u8| {
            let client = client.clone();
            spawn(async move {
                let id = *id_signal.peek();
                match client.rate_book(id, value).await {
                    Ok(()) => {
                        // Re-fetch the book to pick up the updated
                        // aggregates; the notes list is untouched.
                        if let Ok(fetched) = client.get_book(id).await {
                            book.set(Some(fetched));
                        }
                    }
                    Err(_) => {
                        status.set(Some((
                            AlertKind::Error,
                            "Failed to submit rating".to_string(),
                        )));
                    }
                }
            });
        }
    };

    let handle_add_note = {
        let client = client.clone();
        move |_| {
            let content = new_note().trim().to_string();
            if content.is_empty() {
                return;
            }
            let client = client.clone();
            spawn(async move {
                let id = *id_signal.peek();
                match client.create_note(id, &content).await {
                    Ok(created) => {
                        notes.write().insert(0, created);
                        new_note.set(String::new());
                    }
                    Err(_) => {
                        status.set(Some((AlertKind::Error, "Failed to add note".to_string())));
                    }
                }
            });
        }
    };

    let handle_update_note = {
        let client = client.clone();
        move |_| {
            let Some((note_id, draft)) = editing() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                match client.update_note(note_id, draft.trim()).await {
                    Ok(updated) => {
                        if let Some(slot) = notes
                            .write()
                            .iter_mut()
                            .find(|note| note.id == note_id)
                        {
                            *slot = updated;
                        }
                        editing.set(None);
                    }
                    Err(_) => {
                        status.set(Some((
                            AlertKind::Error,
                            "Failed to update note".to_string(),
                        )));
                    }
                }
            });
        }
    };

    let handle_delete_note = {
        let client = client.clone();
        move |note_id: i64| {
            let client = client.clone();
            spawn(async move {
                match client.delete_note(note_id).await {
                    Ok(()) => notes.write().retain(|note| note.id != note_id),
                    Err(_) => {
                        status.set(Some((
                            AlertKind::Error,
                            "Failed to delete note".to_string(),
                        )));
                    }
                }
            });
        }
    };

    let handle_add_to_list = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let id = *id_signal.peek();
                match client.add_to_reading_list(id).await {
                    Ok(()) => {
                        status.set(Some((
                            AlertKind::Success,
                            "Book successfully added to your reading list!".to_string(),
                        )));
                    }
                    Err(_) => {
                        status.set(Some((
                            AlertKind::Error,
                            "Failed to add book to reading list. Please try again.".to_string(),
                        )));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "book-detail-page",
            if loading() {
                Spinner {}
            } else if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            } else if let Some(book) = book() {
                div {
                    class: "book-header",
                    div {
                        class: "book-header-main",
                        h1 { "{book.title}" }
                        h2 { class: "book-author", "by {book.author}" }
                    }
                    div {
                        class: "book-header-rating",
                        RatingStars {
                            value: book.user_rating.unwrap_or(0),
                            disabled: auth().user.is_none(),
                            on_rate: handle_rate,
                        }
                        p { class: "book-average", {format!("({:.1}/10)", book.average_rating)} }
                        p { class: "book-total", "{book.total_ratings} ratings" }
                        if auth().user.is_some() {
                            button {
                                class: "primary",
                                onclick: handle_add_to_list,
                                "Add to Reading List"
                            }
                        } else {
                            p { class: "book-rate-hint", "Please log in to rate" }
                        }
                    }
                }

                if let Some((kind, message)) = status() {
                    Alert { kind: kind, message: message }
                }

                div {
                    class: "book-facts",
                    p { strong { "Genre: " } "{book.genre}" }
                    p { strong { "Publication Date: " } "{book.publication_date}" }
                    p { strong { "ISBN: " } "{book.isbn}" }
                    p { strong { "Pages: " } "{book.page_count}" }
                    p { strong { "Description:" } }
                    p { class: "book-about", "{book.about}" }
                }

                div {
                    class: "notes-section",
                    h2 { "Reviews" }

                    if auth().user.is_some() {
                        div {
                            class: "note-form",
                            textarea {
                                rows: 3,
                                placeholder: "Leave a review...",
                                value: new_note(),
                                oninput: move |evt| new_note.set(evt.value()),
                            }
                            button {
                                class: "primary",
                                disabled: new_note().trim().is_empty(),
                                onclick: handle_add_note,
                                "Submit"
                            }
                        }
                    }

                    if notes().is_empty() {
                        p { class: "notes-empty", "This book does not have any review." }
                    }

                    for note in notes() {
                        div {
                            key: "{note.id}",
                            class: "note",
                            if editing().is_some_and(|(editing_id, _)| editing_id == note.id) {
                                textarea {
                                    rows: 3,
                                    value: editing().map(|(_, draft)| draft).unwrap_or_default(),
                                    oninput: move |evt| {
                                        if let Some(entry) = editing.write().as_mut() {
                                            entry.1 = evt.value();
                                        }
                                    },
                                }
                                div {
                                    class: "note-actions",
                                    button {
                                        class: "primary",
                                        onclick: handle_update_note.clone(),
                                        "Save"
                                    }
                                    button {
                                        class: "secondary",
                                        onclick: move |_| editing.set(None),
                                        "Cancel"
                                    }
                                }
                            } else {
                                div {
                                    class: "note-meta",
                                    span {
                                        class: "note-byline",
                                        "{note.user.username} - {note.created_at}"
                                    }
                                    if auth().user.is_some_and(|user| user.id == note.user.id) {
                                        div {
                                            class: "note-controls",
                                            button {
                                                class: "icon-button",
                                                onclick: {
                                                    let note_id = note.id;
                                                    let content = note.content.clone();
                                                    move |_| {
                                                        editing.set(Some((note_id, content.clone())))
                                                    }
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "icon-button",
                                                onclick: {
                                                    let handle = handle_delete_note.clone();
                                                    let note_id = note.id;
                                                    move |_| handle(note_id)
                                                },
                                                Icon { icon: FaTrash, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                                p { class: "note-content", "{note.content}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
