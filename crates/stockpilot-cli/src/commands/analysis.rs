use std::str::FromStr;

use stockpilot_core::{ChartRange, StockApi, Symbol};

use crate::cli::AnalysisArgs;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &AnalysisArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let range = ChartRange::from_str(&args.range)?;
    let analysis = api.analysis(&symbol, range).await?;

    let table = vec![
        format!("{symbol} — risk analysis over {}", range.label()),
        format!("volatility  : {:.2}%", analysis.volatility * 100.0),
        format!("max drawdown: {:.2}%", analysis.max_drawdown * 100.0),
        format!("risk level  : {}", analysis.risk_level),
        format!(
            "returns     : {}",
            match analysis.returns {
                Some(r) => format::percent(r * 100.0),
                None => String::from("N/A"),
            }
        ),
        format!("data points : {}", analysis.data_points),
    ];

    Ok(CommandResult::new(serde_json::to_value(&analysis)?).with_table(table))
}
