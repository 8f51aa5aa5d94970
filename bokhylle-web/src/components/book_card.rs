use bokhylle_core::Book;
use dioxus::prelude::*;
use tracing::info;

use crate::pages::LibraryState;
use crate::toast::show_toast;
use crate::APP;

/// One card in the library list. Title and author go through rsx text
/// nodes, so whatever the user typed is escaped on the way out.
#[component]
pub fn BookCard(book: Book) -> Element {
    let state = use_context::<LibraryState>();

    let title = book.title.clone();
    let download = book.download_name();

    rsx! {
        div {
            class: "border border-gray-300 rounded-md p-4 flex flex-col gap-1",

            h3 { class: "font-bold text-lg", "{book.title}" }
            p { class: "text-gray-600", "{book.author}" }

            a {
                class: "text-blue-600 hover:underline",
                href: "{book.content}",
                download: "{download}",
                "Download PDF"
            }

            button {
                class: "self-start text-red-600 hover:text-red-500 mt-2",
                onclick: move |_| {
                    let state = state.clone();
                    let title = title.clone();
                    spawn(async move {
                        let removed = APP.cloned().shelf().remove_by_title(&title).await;
                        info!("deleted {removed} book(s) from the card list");
                        state.refresh().await;
                        show_toast("Book removed");
                    });
                },
                "Delete"
            }
        }
    }
}
