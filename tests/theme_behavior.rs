//! Theme store behavior: resolution order, toggling, persistence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stockpilot_store::{
    FileKvStore, KvStore, MemoryKvStore, NoopThemeSink, Theme, ThemeSink, ThemeStore, THEME_KEY,
};

struct RecordingSink {
    applied: AtomicUsize,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            applied: AtomicUsize::new(0),
        }
    }
}

impl ThemeSink for RecordingSink {
    fn apply(&self, _theme: Theme) {
        self.applied.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn prefers_dark_signal_wins_when_nothing_persisted() {
    let store = ThemeStore::open(
        Arc::new(MemoryKvStore::new()),
        Arc::new(NoopThemeSink),
        true,
    );
    assert!(store.is_dark());
}

#[test]
fn toggle_twice_restores_original() {
    let store = ThemeStore::open(
        Arc::new(MemoryKvStore::new()),
        Arc::new(NoopThemeSink),
        true,
    );
    let original = store.current();

    store.toggle();
    store.toggle();
    assert_eq!(store.current(), original);
}

#[test]
fn persisted_theme_overrides_platform_signal_after_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    {
        let kv: Arc<dyn KvStore> = Arc::new(FileKvStore::open(&path));
        let store = ThemeStore::open(kv, Arc::new(NoopThemeSink), false);
        store.set(Theme::Dark);
    }

    // Reload with the opposite platform signal; the persisted value wins.
    let kv: Arc<dyn KvStore> = Arc::new(FileKvStore::open(&path));
    let reloaded = ThemeStore::open(kv, Arc::new(NoopThemeSink), false);
    assert!(reloaded.is_dark());
}

#[test]
fn set_drives_sink_and_subscribers() {
    let sink = Arc::new(RecordingSink::new());
    let store = ThemeStore::open(
        Arc::new(MemoryKvStore::new()),
        sink.clone(),
        false,
    );
    let rx = store.subscribe();
    assert_eq!(*rx.borrow(), Theme::Light);
    let applied_at_open = sink.applied.load(Ordering::SeqCst);

    store.set(Theme::Dark);

    assert_eq!(sink.applied.load(Ordering::SeqCst), applied_at_open + 1);
    assert!(rx.has_changed().expect("sender alive"));
    assert_eq!(*rx.borrow(), Theme::Dark);
}

#[test]
fn open_commits_resolved_theme_to_storage() {
    let kv = Arc::new(MemoryKvStore::new());
    let _store = ThemeStore::open(kv.clone(), Arc::new(NoopThemeSink), true);

    assert_eq!(kv.get(THEME_KEY).as_deref(), Some("dark"));
}
