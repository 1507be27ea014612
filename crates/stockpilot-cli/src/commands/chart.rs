use std::str::FromStr;

use stockpilot_core::{ChartRange, StockApi, Symbol};

use crate::cli::ChartArgs;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &ChartArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let range = ChartRange::from_str(&args.range)?;
    let prices = api.historical(&symbol, range).await?;

    let mut table = Vec::with_capacity(prices.len() + 2);
    table.push(format!(
        "{symbol} — {} bars over {}",
        prices.len(),
        range.label()
    ));
    table.push(format!(
        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "date", "open", "high", "low", "close", "volume"
    ));
    for bar in &prices {
        table.push(format!(
            "{:<12} {:>12} {:>12} {:>12} {:>12} {:>10}",
            bar.date,
            format::currency(bar.open),
            format::currency(bar.high),
            format::currency(bar.low),
            format::currency(bar.close),
            format::volume(bar.volume),
        ));
    }

    Ok(CommandResult::new(serde_json::to_value(&prices)?).with_table(table))
}
