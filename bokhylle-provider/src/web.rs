use async_trait::async_trait;
use bokhylle_core::ShelfProvider;
use tracing::warn;

/// Origin-scoped `window.localStorage`. Synchronous at the browser API
/// boundary; the async trait exists so the fs backend can share it.
pub struct WebStorageProvider;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[async_trait(?Send)]
impl ShelfProvider for WebStorageProvider {
    async fn load(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    async fn save(&self, key: &str, content: &str) {
        let Some(storage) = storage() else {
            warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, content) {
            warn!("localStorage write to {key} failed: {e:?}");
        }
    }

    async fn delete(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}
