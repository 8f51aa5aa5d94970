mod book_card;

pub use book_card::*;
