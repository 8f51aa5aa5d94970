#[cfg(feature = "fs")]
mod fs;

#[cfg(feature = "fs")]
pub use fs::FsProvider;

#[cfg(feature = "web")]
mod web;

#[cfg(feature = "web")]
pub use web::WebStorageProvider;
