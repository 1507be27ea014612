//! # StockPilot Store
//!
//! Client-side persistence and reactive state for the StockPilot client.
//!
//! ## Overview
//!
//! Two small reactive stores sit on top of a durable string key-value
//! store (the terminal analog of browser local storage):
//!
//! - [`WatchlistStore`] — single source of truth for the user's watchlist
//! - [`ThemeStore`] — single dark/light preference with a rendering hook
//!
//! Both follow the same pattern: an in-memory current value mirrored to
//! the key-value store on every committed mutation, observed through a
//! `tokio::sync::watch` channel with replay-latest semantics (every
//! subscriber sees the current value immediately and each committed
//! mutation afterward).
//!
//! Persisted-data corruption is swallowed at the store boundary: a
//! malformed value is logged and treated as "nothing persisted", never an
//! error to callers.

pub mod kv;
pub mod theme;
pub mod watchlist;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use theme::{NoopThemeSink, Theme, ThemeSink, ThemeStore, THEME_KEY};
pub use watchlist::{WatchlistStore, WATCHLIST_KEY};
