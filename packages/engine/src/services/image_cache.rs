//! Image pre-fetch collaborators.
//!
//! Pre-fetch exists purely to warm a cache so the eventual render has no
//! visible load latency. It is best-effort and single-attempt: a failure is
//! logged and swallowed, never surfaced into game state.

use async_trait::async_trait;
use bytes::Bytes;
use moka::future::Cache;
use tracing::{debug, warn};

/// A `preload(uri)` capability the lookahead pipeline calls. No return value
/// is consumed by game logic.
#[async_trait]
pub trait ImagePreloader: Send + Sync {
    async fn preload(&self, uri: &str);
}

/// HTTP-backed preloader warming an in-memory byte cache.
pub struct HttpImageCache {
    client: reqwest::Client,
    cache: Cache<String, Bytes>,
}

impl HttpImageCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: Cache::new(capacity),
        }
    }

    /// Warmed bytes for a uri, if the prefetch has landed.
    pub async fn cached(&self, uri: &str) -> Option<Bytes> {
        self.cache.get(uri).await
    }
}

#[async_trait]
impl ImagePreloader for HttpImageCache {
    async fn preload(&self, uri: &str) {
        if self.cache.contains_key(uri) {
            return;
        }
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .and_then(|r| r.error_for_status());
        match response {
            Ok(response) => match response.bytes().await {
                Ok(body) => {
                    debug!(uri, bytes = body.len(), "image prefetched");
                    self.cache.insert(uri.to_string(), body).await;
                }
                Err(e) => warn!(uri, error = %e, "image prefetch body failed"),
            },
            Err(e) => warn!(uri, error = %e, "image prefetch failed"),
        }
    }
}

/// No-op preloader for tests and headless simulation.
pub struct NoopPreloader;

#[async_trait]
impl ImagePreloader for NoopPreloader {
    async fn preload(&self, _uri: &str) {}
}
