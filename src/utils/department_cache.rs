use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use once_cell::sync::Lazy;

use crate::api::ApiClient;
use crate::error::ApiError;

const DEPARTMENTS_KEY: &str = "departments";

/// The department set changes rarely server-side; cache it so the intake
/// form does not refetch on every use.
static DEPARTMENT_CACHE: Lazy<Cache<&'static str, Arc<Vec<String>>>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(1)
        .time_to_live(Duration::from_secs(600)) // 10 min TTL
        .build()
});

/// Cached department list, fetched from the server on a miss.
pub async fn departments(client: &ApiClient) -> Result<Arc<Vec<String>>, ApiError> {
    if let Some(cached) = DEPARTMENT_CACHE.get(DEPARTMENTS_KEY).await {
        return Ok(cached);
    }
    let fetched = Arc::new(client.list_departments().await?);
    DEPARTMENT_CACHE.insert(DEPARTMENTS_KEY, fetched.clone()).await;
    Ok(fetched)
}

/// Drop the cached list so the next call refetches.
pub async fn invalidate() {
    DEPARTMENT_CACHE.invalidate(DEPARTMENTS_KEY).await;
}
