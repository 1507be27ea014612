use stockpilot_core::{StockApi, Symbol};

use crate::cli::FundamentalsArgs;
use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(args: &FundamentalsArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let fundamentals = api.fundamentals(&symbol).await?;

    let ratio = |value: Option<f64>| match value {
        Some(v) => format!("{v:.2}"),
        None => String::from("N/A"),
    };

    let mut table = vec![
        format!("{} — {}", fundamentals.symbol, fundamentals.name),
        format!(
            "market cap    : {}",
            format::large_number(fundamentals.market_cap)
        ),
        format!("p/e ratio     : {}", ratio(fundamentals.pe_ratio)),
        format!("eps           : {}", ratio(fundamentals.eps)),
        format!(
            "dividend yield: {}",
            match fundamentals.dividend_yield {
                Some(y) => format::percent(y),
                None => String::from("N/A"),
            }
        ),
        format!("beta          : {}", ratio(fundamentals.beta)),
        format!(
            "52-week range : {} — {}",
            match fundamentals.fifty_two_week_low {
                Some(low) => format::currency(low),
                None => String::from("N/A"),
            },
            match fundamentals.fifty_two_week_high {
                Some(high) => format::currency(high),
                None => String::from("N/A"),
            },
        ),
        format!(
            "sector        : {}",
            format::or_na(fundamentals.sector.as_deref())
        ),
        format!(
            "industry      : {}",
            format::or_na(fundamentals.industry.as_deref())
        ),
    ];
    if let Some(description) = &fundamentals.description {
        table.push(String::new());
        table.push(description.clone());
    }

    Ok(CommandResult::new(serde_json::to_value(&fundamentals)?).with_table(table))
}
