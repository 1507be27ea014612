//! Watchlist store.
//!
//! Single source of truth for the watched-symbol collection. The in-memory
//! snapshot lives in a `tokio::sync::watch` channel, which gives every
//! subscriber the current value on subscribe and each committed mutation
//! afterward (FIFO per subscriber). Every mutation persists the full
//! serialized collection before notifying.

use std::sync::Arc;

use tokio::sync::watch;

use stockpilot_core::domain::{Symbol, UtcDateTime, WatchlistItem};

use crate::kv::KvStore;

/// Storage key holding the JSON array of watchlist rows.
pub const WATCHLIST_KEY: &str = "stockpilot_watchlist";

/// Reactive, persisted watchlist collection.
///
/// Invariants owned here:
/// - at most one row per symbol
/// - insertion order, append-only except removals
/// - `added_at` is stamped on commit and never touched again
pub struct WatchlistStore {
    kv: Arc<dyn KvStore>,
    tx: watch::Sender<Vec<WatchlistItem>>,
}

impl WatchlistStore {
    /// Open the store, loading any persisted collection.
    ///
    /// A malformed persisted value is logged and replaced with an empty
    /// collection; the error never reaches callers.
    pub fn open(kv: Arc<dyn KvStore>) -> Self {
        let initial = match kv.get(WATCHLIST_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<WatchlistItem>>(&raw) {
                Ok(items) => items,
                Err(error) => {
                    tracing::warn!(%error, "malformed persisted watchlist, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let (tx, _rx) = watch::channel(initial);
        Self { kv, tx }
    }

    /// Append an item, stamping `added_at` with the current time.
    ///
    /// Idempotent per symbol: re-adding an existing symbol changes nothing
    /// (including the original `added_at`) and emits no notification.
    pub fn add(&self, item: WatchlistItem) {
        let mut items = self.tx.borrow().clone();
        if items.iter().any(|row| row.symbol == item.symbol) {
            return;
        }

        items.push(WatchlistItem {
            added_at: UtcDateTime::now(),
            ..item
        });
        self.commit(items);
    }

    /// Remove any row with the given symbol. No-op when absent.
    pub fn remove(&self, symbol: &Symbol) {
        let mut items = self.tx.borrow().clone();
        let before = items.len();
        items.retain(|row| &row.symbol != symbol);
        if items.len() == before {
            return;
        }
        self.commit(items);
    }

    /// Replace the collection with an empty one.
    pub fn clear(&self) {
        self.commit(Vec::new());
    }

    /// Synchronous membership check against the in-memory snapshot.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.tx.borrow().iter().any(|row| &row.symbol == symbol)
    }

    /// Owned copy of the current snapshot.
    pub fn current(&self) -> Vec<WatchlistItem> {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribe to snapshots. The receiver observes the current value
    /// immediately and every committed mutation afterward.
    pub fn subscribe(&self) -> watch::Receiver<Vec<WatchlistItem>> {
        self.tx.subscribe()
    }

    // Persist first, then notify. A crash between the two leaves storage
    // ahead of subscribers, which a reload reconciles.
    fn commit(&self, items: Vec<WatchlistItem>) {
        match serde_json::to_string(&items) {
            Ok(raw) => self.kv.put(WATCHLIST_KEY, &raw),
            Err(error) => {
                tracing::warn!(%error, "failed to serialize watchlist, skipping persist");
            }
        }
        self.tx.send_replace(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use stockpilot_core::Symbol;

    fn item(symbol: &str, price: f64) -> WatchlistItem {
        WatchlistItem::new(
            Symbol::parse(symbol).expect("symbol"),
            format!("{symbol} Inc."),
            price,
            0.0,
            0.0,
        )
        .expect("item")
    }

    #[test]
    fn add_is_idempotent_per_symbol() {
        let store = WatchlistStore::open(Arc::new(MemoryKvStore::new()));
        store.add(item("AAPL", 150.0));
        let first_added_at = store.current()[0].added_at;

        store.add(item("AAPL", 199.0));
        let snapshot = store.current();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].price, 150.0);
        assert_eq!(snapshot[0].added_at, first_added_at);
    }

    #[test]
    fn remove_absent_symbol_is_noop() {
        let kv = Arc::new(MemoryKvStore::new());
        let store = WatchlistStore::open(kv.clone());
        store.add(item("AAPL", 150.0));
        let persisted_before = kv.get(WATCHLIST_KEY);

        store.remove(&Symbol::parse("TSLA").expect("symbol"));
        assert_eq!(store.len(), 1);
        assert_eq!(kv.get(WATCHLIST_KEY), persisted_before);
    }

    #[test]
    fn malformed_persisted_value_starts_empty() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put(WATCHLIST_KEY, "[{broken");

        let store = WatchlistStore::open(kv);
        assert!(store.is_empty());
    }

    #[test]
    fn subscriber_sees_snapshot_on_subscribe_and_after_mutation() {
        let store = WatchlistStore::open(Arc::new(MemoryKvStore::new()));
        store.add(item("AAPL", 150.0));

        let rx = store.subscribe();
        assert_eq!(rx.borrow().len(), 1);

        store.add(item("MSFT", 410.0));
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow().len(), 2);
    }
}
