//! Theme store.
//!
//! Same pattern as the watchlist store, reduced to one persisted value:
//! the dark/light preference. Setting the theme additionally drives a
//! [`ThemeSink`], the hook the rendering layer uses to apply or remove its
//! global dark-mode flag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::kv::KvStore;

/// Storage key holding the persisted theme name.
pub const THEME_KEY: &str = "stockpilot_theme";

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn from_persisted(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Rendering-layer hook applied whenever the theme is set.
pub trait ThemeSink: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Sink for surfaces with no global visual-mode flag (tests, plain CLI).
#[derive(Debug, Default)]
pub struct NoopThemeSink;

impl ThemeSink for NoopThemeSink {
    fn apply(&self, theme: Theme) {
        let _ = theme;
    }
}

/// Reactive, persisted theme preference.
pub struct ThemeStore {
    kv: Arc<dyn KvStore>,
    sink: Arc<dyn ThemeSink>,
    tx: watch::Sender<Theme>,
}

impl ThemeStore {
    /// Open the store and apply the resolved theme.
    ///
    /// Resolution order: persisted value, then the platform "prefers dark"
    /// signal supplied by the caller. An unrecognized persisted value is
    /// logged and treated as nothing persisted. The resolved theme is
    /// committed immediately (persisted and pushed through the sink), as
    /// the original client did on load.
    pub fn open(kv: Arc<dyn KvStore>, sink: Arc<dyn ThemeSink>, prefers_dark: bool) -> Self {
        let initial = match kv.get(THEME_KEY) {
            Some(raw) => match Theme::from_persisted(&raw) {
                Some(theme) => theme,
                None => {
                    tracing::warn!(value = %raw, "unrecognized persisted theme, using platform preference");
                    fallback(prefers_dark)
                }
            },
            None => fallback(prefers_dark),
        };

        let (tx, _rx) = watch::channel(initial);
        let store = Self { kv, sink, tx };
        store.set(initial);
        store
    }

    /// Flip between dark and light.
    pub fn toggle(&self) {
        self.set(self.current().flipped());
    }

    /// Persist the theme, apply the rendering hook, then notify.
    pub fn set(&self, theme: Theme) {
        self.kv.put(THEME_KEY, theme.as_str());
        self.sink.apply(theme);
        self.tx.send_replace(theme);
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// Subscribe with replay-latest semantics.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

const fn fallback(prefers_dark: bool) -> Theme {
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::kv::MemoryKvStore;

    struct CountingSink {
        applied: AtomicUsize,
    }

    impl ThemeSink for CountingSink {
        fn apply(&self, _theme: Theme) {
            self.applied.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn falls_back_to_platform_preference() {
        let store = ThemeStore::open(
            Arc::new(MemoryKvStore::new()),
            Arc::new(NoopThemeSink),
            true,
        );
        assert!(store.is_dark());
    }

    #[test]
    fn persisted_value_wins_over_preference() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put(THEME_KEY, "light");

        let store = ThemeStore::open(kv, Arc::new(NoopThemeSink), true);
        assert!(!store.is_dark());
    }

    #[test]
    fn toggle_twice_returns_to_original() {
        let store = ThemeStore::open(
            Arc::new(MemoryKvStore::new()),
            Arc::new(NoopThemeSink),
            false,
        );
        let original = store.current();

        store.toggle();
        assert_ne!(store.current(), original);
        store.toggle();
        assert_eq!(store.current(), original);
    }

    #[test]
    fn set_persists_and_drives_sink() {
        let kv = Arc::new(MemoryKvStore::new());
        let sink = Arc::new(CountingSink {
            applied: AtomicUsize::new(0),
        });
        let store = ThemeStore::open(kv.clone(), sink.clone(), false);
        let applied_at_open = sink.applied.load(Ordering::SeqCst);

        store.set(Theme::Dark);
        assert_eq!(kv.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(sink.applied.load(Ordering::SeqCst), applied_at_open + 1);
    }

    #[test]
    fn unrecognized_persisted_value_uses_preference() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put(THEME_KEY, "solarized");

        let store = ThemeStore::open(kv, Arc::new(NoopThemeSink), true);
        assert!(store.is_dark());
    }
}
