use std::fmt::Debug;
use std::sync::Arc;

use bokhylle_core::Shelf;

#[derive(Clone)]
pub struct App(Arc<Shelf>);

impl App {
    #[cfg(not(feature = "desktop"))]
    pub fn new() -> Self {
        use bokhylle_provider::WebStorageProvider;

        Self(Arc::new(Shelf::new(Box::new(WebStorageProvider))))
    }

    #[cfg(feature = "desktop")]
    pub fn new() -> Self {
        use bokhylle_provider::FsProvider;

        let root = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("bokhylle");

        Self(Arc::new(Shelf::new(Box::new(FsProvider::new(&root)))))
    }

    pub fn shelf(&self) -> Arc<Shelf> {
        self.0.clone()
    }
}

impl Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("App").finish()
    }
}

#[cfg(not(feature = "desktop"))]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(feature = "desktop")]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
