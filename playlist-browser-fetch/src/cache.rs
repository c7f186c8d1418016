/* This file is part of the Playlist Browser project
*
*  Copyright (C) 2025 the Playlist Browser contributors
*  
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{collections::HashMap, sync::{Arc, Mutex, MutexGuard, PoisonError}, time::Duration};

use chrono::{DateTime, Utc};
use playlist_browser_api::CacheStats;

use crate::clock::{Clock, SystemClock};

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    payload: V,
    stored_at: DateTime<Utc>,
}

/// In-memory response cache with a fixed time-to-live
///
/// Expired entries are only dropped when they are read, or when [`ResponseCache::purge_expired`] is called.
/// The lock is never held across an await point, so concurrent fetches for the same key are not coalesced.
pub struct ResponseCache<V, C = SystemClock> {
    entries: Mutex<HashMap<Arc<str>, CacheEntry<V>>>,
    ttl: Duration,
    clock: C,
}

impl<V: Clone> ResponseCache<V, SystemClock> {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::new(ttl, SystemClock)
    }
}

impl<V: Clone, C: Clock> ResponseCache<V, C> {
    pub fn new(ttl: Duration, clock: C) -> Self {
        ResponseCache {
            entries: Mutex::default(),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Arc<str>, CacheEntry<V>>> {
        // entries are replaced whole, a panic elsewhere can't leave one half-written
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        // a clock that went backwards makes the age negative, count that as fresh
        (now - entry.stored_at).to_std().map_or(true, |age| age < self.ttl)
    }

    /// Returns the cached payload for `key` if it's younger than the TTL
    ///
    /// An expired entry is evicted by this call.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if self.is_live(entry, now) {
            return Some(entry.payload.clone());
        }
        entries.remove(key);
        None
    }

    pub fn insert(&self, key: impl Into<Arc<str>>, payload: V) {
        let entry = CacheEntry {
            payload,
            stored_at: self.clock.now(),
        };
        self.lock().insert(key.into(), entry);
    }

    /// Drops every expired entry
    ///
    /// Returns the number of cleared entries
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| self.is_live(entry, now));
        before - entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        self.lock().values().fold(CacheStats::default(), |mut stats, entry| {
            stats.total += 1;
            if self.is_live(entry, now) {
                stats.live += 1;
            } else {
                stats.expired += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::clock::ManualClock;

    fn cache() -> (ResponseCache<Arc<str>, ManualClock>, ManualClock) {
        let clock = ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
        (ResponseCache::new(Duration::from_secs(300), clock.clone()), clock)
    }

    #[test]
    fn read_within_ttl_returns_written_payload() {
        let (cache, clock) = cache();
        cache.insert("playlist_PL1_20", Arc::from("payload"));
        assert_eq!(cache.get("playlist_PL1_20").as_deref(), Some("payload"));
        clock.advance(TimeDelta::seconds(299));
        assert_eq!(cache.get("playlist_PL1_20").as_deref(), Some("payload"));
        assert_eq!(cache.get("playlist_PL2_20"), None);
    }

    #[test]
    fn read_at_expiry_misses_and_evicts() {
        let (cache, clock) = cache();
        cache.insert("videos_a,b", Arc::from("old"));
        clock.advance(TimeDelta::seconds(300));
        assert_eq!(cache.get("videos_a,b"), None);
        assert_eq!(cache.stats().total, 0);
    }

    #[test]
    fn rewrite_restarts_the_ttl() {
        let (cache, clock) = cache();
        cache.insert("k", Arc::from("first"));
        clock.advance(TimeDelta::seconds(200));
        cache.insert("k", Arc::from("second"));
        clock.advance(TimeDelta::seconds(200));
        assert_eq!(cache.get("k").as_deref(), Some("second"));
    }

    #[test]
    fn clock_going_backwards_keeps_entries() {
        let (cache, clock) = cache();
        cache.insert("k", Arc::from("v"));
        clock.advance(TimeDelta::seconds(-60));
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn stats_and_purge() {
        let (cache, clock) = cache();
        cache.insert("a", Arc::from("1"));
        clock.advance(TimeDelta::seconds(250));
        cache.insert("b", Arc::from("2"));
        clock.advance(TimeDelta::seconds(100));
        assert_eq!(cache.stats(), CacheStats { total: 2, live: 1, expired: 1 });
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.stats(), CacheStats { total: 1, live: 1, expired: 0 });
        assert_eq!(cache.purge_expired(), 0);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }
}
