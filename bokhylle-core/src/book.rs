use serde::{Deserialize, Serialize};

/// One stored book entry. The title doubles as the deletion key, so
/// duplicate titles are possible but indistinguishable to delete.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Data URL holding the uploaded file. Used both as the storage
    /// payload and directly as the download link target.
    pub content: String,
}

impl Book {
    pub fn new(title: String, author: String, content: String) -> Self {
        Self {
            title,
            author,
            content,
        }
    }

    /// Filename offered when the card's download link is activated.
    pub fn download_name(&self) -> String {
        format!("{}.pdf", self.title)
    }
}
