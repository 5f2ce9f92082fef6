use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Condvar, Mutex};

use dashboard_core::MetricsTable;

pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Memoizes derived metrics tables keyed by source path.
///
/// Bounded to `capacity` entries with least-recently-used eviction.
/// Concurrent misses on one key collapse to a single in-flight derivation;
/// waiters adopt its result unless `invalidate_all` ran in the meantime, in
/// which case they derive fresh. Failed derivations are never memoized.
pub struct DerivationCache {
    state: Mutex<CacheState>,
    done: Condvar,
    capacity: usize,
}

struct CacheState {
    entries: HashMap<PathBuf, CacheEntry>,
    pending: HashSet<PathBuf>,
    generation: u64,
    tick: u64,
}

struct CacheEntry {
    table: Arc<MetricsTable>,
    last_used: u64,
}

impl DerivationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                pending: HashSet::new(),
                generation: 0,
                tick: 0,
            }),
            done: Condvar::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("cache mutex poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached table for `key`, deriving it from the file when
    /// absent.
    pub fn get_or_compute(&self, key: &Path) -> metrics::Result<Arc<MetricsTable>> {
        self.get_or_compute_with(key, metrics::derive)
    }

    pub fn get_or_compute_with<F>(&self, key: &Path, compute: F) -> metrics::Result<Arc<MetricsTable>>
    where
        F: FnOnce(&Path) -> metrics::Result<MetricsTable>,
    {
        let generation;
        {
            let mut state = self.state.lock().expect("cache mutex poisoned");
            loop {
                let tick = state.tick + 1;
                state.tick = tick;
                if let Some(entry) = state.entries.get_mut(key) {
                    entry.last_used = tick;
                    return Ok(entry.table.clone());
                }
                if state.pending.contains(key) {
                    // Another caller is deriving this key; adopt its result.
                    state = self.done.wait(state).expect("cache mutex poisoned");
                    continue;
                }
                state.pending.insert(key.to_path_buf());
                generation = state.generation;
                break;
            }
        }

        let result = compute(key);

        let mut state = self.state.lock().expect("cache mutex poisoned");
        state.pending.remove(key);
        let output = match result {
            Ok(table) => {
                let table = Arc::new(table);
                // Skip insertion when an invalidation raced the derivation:
                // the snapshot may predate the data change the invalidation
                // announced.
                if state.generation == generation {
                    let tick = state.tick + 1;
                    state.tick = tick;
                    state.entries.insert(
                        key.to_path_buf(),
                        CacheEntry {
                            table: table.clone(),
                            last_used: tick,
                        },
                    );
                    while state.entries.len() > self.capacity {
                        let victim = state
                            .entries
                            .iter()
                            .min_by_key(|(_, entry)| entry.last_used)
                            .map(|(path, _)| path.clone());
                        match victim {
                            Some(victim) => {
                                state.entries.remove(&victim);
                            }
                            None => break,
                        }
                    }
                }
                Ok(table)
            }
            Err(err) => Err(err),
        };
        drop(state);
        self.done.notify_all();
        output
    }

    /// Drops every cached entry. Callers arriving after this observe freshly
    /// derived tables, including callers already waiting on an in-flight
    /// derivation.
    pub fn invalidate_all(&self) {
        let mut state = self.state.lock().expect("cache mutex poisoned");
        state.entries.clear();
        state.generation += 1;
    }
}

impl Default for DerivationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
