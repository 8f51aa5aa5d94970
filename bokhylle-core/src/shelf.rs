use async_trait::async_trait;
use tracing::{info, warn};

use crate::Book;

/// All books live as one JSON array under this key.
pub const BOOKS_KEY: &str = "books";

/// Raw blob storage. Backends swallow their own failures: a missing or
/// unreadable blob is `None`, a failed write is logged and dropped.
#[async_trait(?Send)]
pub trait ShelfProvider {
    async fn load(&self, key: &str) -> Option<String>;
    async fn save(&self, key: &str, content: &str);
    async fn delete(&self, key: &str);
}

/// The persisted collection. Every operation is a full read-modify-write
/// of the whole array, which is fine for a personal library but is not
/// protected against another tab writing in between.
pub struct Shelf {
    provider: Box<dyn ShelfProvider>,
}

impl Shelf {
    pub fn new(provider: Box<dyn ShelfProvider>) -> Self {
        Self { provider }
    }

    /// Loads the stored collection. Nothing stored, or a blob that fails
    /// to parse, degrades to an empty shelf rather than an error.
    pub async fn load_all(&self) -> Vec<Book> {
        let Some(raw) = self.provider.load(BOOKS_KEY).await else {
            return vec![];
        };

        match serde_json::from_str(&raw) {
            Ok(books) => books,
            Err(e) => {
                warn!("stored books failed to parse, treating as empty: {e}");
                vec![]
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.load_all().await.len()
    }

    pub async fn append(&self, book: Book) {
        let mut books = self.load_all().await;
        info!("appending book: {}", &book.title);
        books.push(book);
        self.persist(books).await;
    }

    /// Removes every record whose title matches exactly, returning how
    /// many were removed. Duplicate titles all go together.
    pub async fn remove_by_title(&self, title: &str) -> usize {
        let mut books = self.load_all().await;
        let before = books.len();
        books.retain(|b| b.title != title);
        let removed = before - books.len();
        info!("removed {removed} book(s) titled {title:?}");
        self.persist(books).await;
        removed
    }

    async fn persist(&self, books: Vec<Book>) {
        match serde_json::to_string(&books) {
            Ok(s) => self.provider.save(BOOKS_KEY, &s).await,
            Err(e) => warn!("failed to serialize books: {e}"),
        }
    }
}
