use crate::error::AppResult;

/// Thin wrapper over Redis for short-lived key-value data. Lives outside the
/// process so entries survive restarts and are shared across instances.
#[derive(Clone)]
pub struct CheckoutCache {
    client: redis::Client,
}

impl CheckoutCache {
    pub fn new(url: &str) -> AppResult<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    async fn conn(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    pub async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()> {
        let mut conn = self.conn().await?;
        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(ttl_secs)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.conn().await?;
        let _: () = redis::cmd("DEL").arg(key).query_async(&mut conn).await?;
        Ok(())
    }
}
