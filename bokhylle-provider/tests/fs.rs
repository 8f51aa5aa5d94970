#![cfg(feature = "fs")]

use std::path::PathBuf;

use bokhylle_core::{Book, Shelf, ShelfProvider};
use bokhylle_provider::FsProvider;
use uuid::Uuid;

struct TestRoot {
    root: PathBuf,
}

impl TestRoot {
    fn new() -> Self {
        let root = std::env::temp_dir()
            .join("bokhylle-test")
            .join(Uuid::new_v4().as_simple().to_string());
        Self { root }
    }

    fn provider(&self) -> FsProvider {
        FsProvider::new(&self.root)
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

#[tokio::test]
async fn missing_root_loads_none() {
    let root = TestRoot::new();
    assert!(root.provider().load("books").await.is_none());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let root = TestRoot::new();
    let provider = root.provider();

    provider.save("books", "[1,2,3]").await;
    assert_eq!(provider.load("books").await.as_deref(), Some("[1,2,3]"));

    provider.save("books", "[]").await;
    assert_eq!(provider.load("books").await.as_deref(), Some("[]"));
}

#[tokio::test]
async fn delete_removes_the_blob() {
    let root = TestRoot::new();
    let provider = root.provider();

    provider.save("books", "[]").await;
    provider.delete("books").await;
    assert!(provider.load("books").await.is_none());

    // deleting again is a no-op
    provider.delete("books").await;
}

#[tokio::test]
async fn shelf_over_fs_survives_reopen() {
    let root = TestRoot::new();

    {
        let shelf = Shelf::new(Box::new(root.provider()));
        shelf
            .append(Book::new(
                "Dune".to_string(),
                "Herbert".to_string(),
                "data:,".to_string(),
            ))
            .await;
    }

    // a fresh provider over the same root sees the record
    let shelf = Shelf::new(Box::new(root.provider()));
    let books = shelf.load_all().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
}
