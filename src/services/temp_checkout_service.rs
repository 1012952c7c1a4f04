use serde_json::Value;
use uuid::Uuid;

use crate::cache::CheckoutCache;
use crate::error::{AppError, AppResult};
use crate::models::TempCheckoutResponse;

/// Holds in-progress checkout payloads (customizer state handed over from
/// the storefront) under a server-generated key until the client completes
/// or abandons the flow. Entries expire on their own.
#[derive(Clone)]
pub struct TempCheckoutService {
    cache: CheckoutCache,
    ttl_secs: u64,
}

impl TempCheckoutService {
    pub fn new(cache: CheckoutCache, ttl_secs: u64) -> Self {
        Self { cache, ttl_secs }
    }

    pub async fn store(&self, payload: &Value) -> AppResult<TempCheckoutResponse> {
        let key = Uuid::new_v4().to_string();
        let serialized = serde_json::to_string(payload)?;
        self.cache
            .set_with_ttl(&Self::cache_key(&key), &serialized, self.ttl_secs)
            .await?;

        Ok(TempCheckoutResponse {
            key,
            expires_in: self.ttl_secs,
        })
    }

    pub async fn fetch(&self, key: &str) -> AppResult<Value> {
        let raw = self
            .cache
            .get(&Self::cache_key(key))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checkout data {key} not found")))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        self.cache.delete(&Self::cache_key(key)).await
    }

    fn cache_key(key: &str) -> String {
        format!("checkout:temp:{key}")
    }
}
