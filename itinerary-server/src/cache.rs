//! Caching of computed itinerary views.
//!
//! Propagation and geometry resolution are deterministic for a given anchor
//! over the pristine itinerary, so the server caches whole computed views
//! keyed by the resolved landing timestamp. Capacity and TTL bounds keep
//! cardinality in check when clients probe many anchors.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::WallTime;
use crate::web::ItineraryView;

/// Cache key: the resolved landing timestamp, or `None` for the
/// anchor-less view (placeholder times).
pub type ViewKey = Option<WallTime>;

/// Configuration for the view cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 256,
        }
    }
}

/// Cache of computed itinerary views.
#[derive(Clone)]
pub struct ViewCache {
    views: MokaCache<ViewKey, Arc<ItineraryView>>,
}

impl ViewCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let views = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        Self { views }
    }

    /// Look up the computed view for an anchor.
    pub async fn get(&self, key: &ViewKey) -> Option<Arc<ItineraryView>> {
        self.views.get(key).await
    }

    /// Store the computed view for an anchor.
    pub async fn insert(&self, key: ViewKey, view: Arc<ItineraryView>) {
        self.views.insert(key, view).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_view() -> Arc<ItineraryView> {
        Arc::new(ItineraryView {
            date_anchor: None,
            start_date: None,
            landing_date: None,
            landing_time: None,
            days: Vec::new(),
        })
    }

    fn key(hhmm: &str) -> ViewKey {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        Some(WallTime::parse_hhmm(hhmm, date).unwrap())
    }

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = ViewCache::new(&CacheConfig::default());
        let k = key("14:30");

        assert!(cache.get(&k).await.is_none());

        let view = empty_view();
        cache.insert(k, view.clone()).await;

        let hit = cache.get(&k).await.unwrap();
        assert!(Arc::ptr_eq(&hit, &view));
    }

    #[tokio::test]
    async fn distinct_anchors_are_distinct_entries() {
        let cache = ViewCache::new(&CacheConfig::default());

        cache.insert(key("14:30"), empty_view()).await;

        assert!(cache.get(&key("14:30")).await.is_some());
        assert!(cache.get(&key("14:31")).await.is_none());
        assert!(cache.get(&None).await.is_none());
    }

    #[tokio::test]
    async fn anchorless_view_has_its_own_slot() {
        let cache = ViewCache::new(&CacheConfig::default());

        cache.insert(None, empty_view()).await;
        assert!(cache.get(&None).await.is_some());
    }
}
