//! Application services, constructed once and threaded through commands.
//!
//! The stores and the facade are plain values owned here rather than
//! ambient singletons; every command receives the context by reference.

use std::path::PathBuf;
use std::sync::Arc;

use stockpilot_core::api::DEFAULT_BASE_URL;
use stockpilot_core::{HttpClient, ReqwestHttpClient, StockApi};
use stockpilot_store::{FileKvStore, KvStore, NoopThemeSink, ThemeStore, WatchlistStore};

use crate::cli::Cli;

const STORE_FILE: &str = "store.json";

pub struct AppContext {
    pub api: StockApi,
    pub watchlist: WatchlistStore,
    pub theme: ThemeStore,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Self {
        let base_url = cli
            .base_url
            .clone()
            .or_else(|| std::env::var("STOCKPILOT_API_URL").ok())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        let api = StockApi::new(base_url, http).with_timeout_ms(cli.timeout_ms);

        let kv: Arc<dyn KvStore> = Arc::new(FileKvStore::open(
            data_dir(cli.data_dir.clone()).join(STORE_FILE),
        ));
        let watchlist = WatchlistStore::open(kv.clone());
        // The terminal has no document-level dark-mode flag to flip.
        let theme = ThemeStore::open(kv, Arc::new(NoopThemeSink), prefers_dark());

        Self {
            api,
            watchlist,
            theme,
        }
    }
}

fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("STOCKPILOT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".stockpilot"),
        Err(_) => PathBuf::from(".stockpilot"),
    }
}

/// Terminal analog of the browser's prefers-color-scheme query.
fn prefers_dark() -> bool {
    matches!(
        std::env::var("STOCKPILOT_PREFERS_DARK").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}
