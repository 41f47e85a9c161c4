//! Single-entry forecast cache keyed by coordinates.

use chrono::{DateTime, Duration, Utc};

use crate::model::Coordinates;

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    key: Coordinates,
    value: T,
    cached_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Holds at most one value. A lookup hits only when the key matches and the
/// entry has not expired; a new insert replaces whatever was there.
#[derive(Debug, Clone)]
pub struct FreshnessCache<T> {
    ttl: Duration,
    entry: Option<CacheEntry<T>>,
}

impl<T: Clone> FreshnessCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: Coordinates, now: DateTime<Utc>) -> Option<T> {
        self.entry
            .as_ref()
            .filter(|e| e.key == key && now < e.expires_at)
            .map(|e| e.value.clone())
    }

    pub fn insert(&mut self, key: Coordinates, value: T, now: DateTime<Utc>) {
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entry = Some(CacheEntry { key, value, cached_at: now, expires_at });
    }

    /// When the current entry was stored, if any.
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|e| e.cached_at)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
