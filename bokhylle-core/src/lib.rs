mod book;
pub mod datauri;
pub mod filter;
mod shelf;

pub use book::Book;
pub use shelf::{Shelf, ShelfProvider, BOOKS_KEY};
