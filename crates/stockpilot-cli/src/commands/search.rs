use stockpilot_core::StockApi;

use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &SearchArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let mut results = api.search(&args.query).await?;
    if args.limit > 0 && results.len() > args.limit {
        results.truncate(args.limit);
    }

    let mut table = Vec::with_capacity(results.len() + 1);
    if results.is_empty() {
        table.push(format!("no instruments matching '{}'", args.query.trim()));
    }
    for result in &results {
        table.push(format!(
            "{:<8} {:<40} {:<10} {}",
            result.symbol,
            result.name,
            format::or_na(result.exchange.as_deref()),
            format::or_na(result.instrument_type.as_deref()),
        ));
    }

    Ok(CommandResult::new(serde_json::to_value(&results)?).with_table(table))
}
