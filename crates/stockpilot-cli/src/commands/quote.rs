use stockpilot_core::{StockApi, Symbol};

use crate::cli::QuoteArgs;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &QuoteArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let quote = api.quote(&symbol).await?;

    let mut table = vec![
        format!("{} — {}", quote.symbol, quote.name),
        format!(
            "price    : {} {} {} ({})",
            format::currency(quote.price),
            format::change_arrow(quote.change),
            format::currency(quote.change.abs()),
            format::percent(quote.change_percent),
        ),
        format!("volume   : {}", format::volume(quote.volume)),
    ];

    if let (Some(open), Some(high), Some(low)) = (quote.open, quote.high, quote.low) {
        table.push(format!(
            "day      : open {}  high {}  low {}",
            format::currency(open),
            format::currency(high),
            format::currency(low),
        ));
    }
    if let Some(previous_close) = quote.previous_close {
        table.push(format!("prev close: {}", format::currency(previous_close)));
    }
    if let Some(exchange) = &quote.exchange {
        table.push(format!("exchange : {exchange}"));
    }
    if let Some(timestamp) = &quote.timestamp {
        table.push(format!("as of    : {timestamp}"));
    }

    Ok(CommandResult::new(serde_json::to_value(&quote)?).with_table(table))
}
