use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::{CategoryCount, Error, Store};

/// Cached snapshot of per-category template counts.
///
/// The browse page asks for counts on every render while the underlying
/// query is a grouped scan, so results are held for a TTL and dropped
/// whenever a write invalidates them.
pub struct CategoryCountCache {
  ttl: Duration,
  snapshot: RwLock<Option<(Instant, Vec<CategoryCount>)>>,
}

impl CategoryCountCache {
  pub fn new(ttl: Duration) -> Self {
    Self {
      ttl,
      snapshot: RwLock::new(None),
    }
  }

  /// Return the cached counts, refreshing from the store when stale or
  /// absent.
  pub async fn get_or_refresh<S: Store + ?Sized>(
    &self,
    store: &S,
  ) -> Result<Vec<CategoryCount>, Error> {
    // Try read lock first; a poisoned lock counts as a miss.
    {
      let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
      if let Some((refreshed_at, counts)) = guard.as_ref()
        && refreshed_at.elapsed() < self.ttl
      {
        return Ok(counts.clone());
      }
    }

    let counts = store.count_by_category().await?;

    {
      let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
      *guard = Some((Instant::now(), counts.clone()));
    }

    Ok(counts)
  }

  /// Drop the snapshot; the next read refreshes.
  pub fn invalidate(&self) {
    let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
  }
}
