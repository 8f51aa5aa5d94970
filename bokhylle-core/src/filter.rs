use crate::Book;

/// Live-search match: substring over lowercased title and author. The
/// empty query matches everything.
pub fn matches(book: &Book, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    book.title.to_lowercase().contains(&query) || book.author.to_lowercase().contains(&query)
}

/// What the empty-state panel should say. Computed from the STORED total,
/// not the visible total, so filtering an existing library to nothing
/// reads differently from an empty library.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShelfStatus {
    /// Nothing stored at all.
    Empty,
    /// Books exist but the active search hides every one of them.
    NoMatches,
    /// At least one card is visible, panel hidden.
    Listing,
}

impl ShelfStatus {
    pub fn compute(total: usize, visible: usize) -> Self {
        if total == 0 {
            Self::Empty
        } else if visible == 0 {
            Self::NoMatches
        } else {
            Self::Listing
        }
    }

    pub fn panel(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Empty => Some((
                "No books yet",
                "Add your first title by uploading a PDF. The cover image is optional.",
            )),
            Self::NoMatches => Some((
                "No matches found",
                "Try a different search by title or author.",
            )),
            Self::Listing => None,
        }
    }
}
