mod add;
mod library;

pub use add::*;
pub use library::*;
