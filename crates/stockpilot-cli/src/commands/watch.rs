use serde_json::json;

use stockpilot_core::{RequestSlot, RequestState, StockApi, Symbol, WatchlistItem};
use stockpilot_store::WatchlistStore;

use crate::cli::{WatchArgs, WatchCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &WatchArgs, context: &AppContext) -> Result<CommandResult, CliError> {
    match &args.command {
        WatchCommand::Add { symbol } => add(symbol, &context.api, &context.watchlist).await,
        WatchCommand::Remove { symbol } => remove(symbol, &context.watchlist),
        WatchCommand::List { live } => list(*live, &context.api, &context.watchlist).await,
        WatchCommand::Clear => clear(&context.watchlist),
    }
}

async fn add(
    raw_symbol: &str,
    api: &StockApi,
    store: &WatchlistStore,
) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(raw_symbol)?;
    if store.contains(&symbol) {
        let table = vec![format!("{symbol} is already on the watchlist")];
        return Ok(CommandResult::new(json!({ "added": false, "symbol": symbol })).with_table(table));
    }

    // Populate the stored row from the live quote, as the detail page does.
    let quote = api.quote(&symbol).await?;
    let item = WatchlistItem::from_quote(&quote)?;
    store.add(item);

    let table = vec![format!(
        "added {symbol} at {} ({})",
        format::currency(quote.price),
        format::percent(quote.change_percent),
    )];
    Ok(CommandResult::new(json!({ "added": true, "symbol": symbol })).with_table(table))
}

fn remove(raw_symbol: &str, store: &WatchlistStore) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(raw_symbol)?;
    let was_present = store.contains(&symbol);
    store.remove(&symbol);

    let table = if was_present {
        vec![format!("removed {symbol}")]
    } else {
        vec![format!("{symbol} was not on the watchlist")]
    };
    Ok(CommandResult::new(json!({ "removed": was_present, "symbol": symbol })).with_table(table))
}

async fn list(
    live: bool,
    api: &StockApi,
    store: &WatchlistStore,
) -> Result<CommandResult, CliError> {
    let items = store.current();
    if items.is_empty() {
        return Ok(
            CommandResult::new(serde_json::to_value(&items)?)
                .with_table(vec![String::from("watchlist is empty")]),
        );
    }

    let mut table = vec![format!(
        "{:<8} {:>12} {:>10} {:>9}  {}",
        "symbol", "price", "change", "pct", "added"
    )];

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        // One request slot per row: a failed refresh falls back to the
        // persisted values instead of blanking the row.
        let mut slot: RequestSlot<WatchlistItem> = RequestSlot::new();
        if live {
            let ticket = slot.begin();
            let outcome = match api.quote(&item.symbol).await {
                Ok(quote) => WatchlistItem::from_quote(&quote)
                    .map(|mut refreshed| {
                        refreshed.added_at = item.added_at;
                        refreshed
                    })
                    .map_err(|error| error.to_string()),
                Err(error) => Err(error.to_string()),
            };
            slot.complete(ticket, outcome);
        }

        let (row, stale) = match slot.state() {
            RequestState::Success(refreshed) => (refreshed.clone(), false),
            RequestState::Failed(message) => {
                tracing::warn!(symbol = %item.symbol, %message, "quote refresh failed, showing stored row");
                (item, live)
            }
            RequestState::Idle | RequestState::Loading => (item, false),
        };

        table.push(format!(
            "{:<8} {:>12} {:>10} {:>9}  {}{}",
            row.symbol.as_str(),
            format::currency(row.price),
            format!("{}{}", format::change_arrow(row.change), format::currency(row.change.abs())),
            format::percent(row.change_percent),
            row.added_at,
            if stale { "  (stale)" } else { "" },
        ));
        rows.push(row);
    }

    Ok(CommandResult::new(serde_json::to_value(&rows)?).with_table(table))
}

fn clear(store: &WatchlistStore) -> Result<CommandResult, CliError> {
    let count = store.len();
    store.clear();

    let table = vec![format!("cleared {count} symbol(s)")];
    Ok(CommandResult::new(json!({ "cleared": count })).with_table(table))
}
