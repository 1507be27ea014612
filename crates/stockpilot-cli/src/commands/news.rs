use stockpilot_core::{StockApi, Symbol};

use crate::cli::NewsArgs;
use crate::error::CliError;
use crate::output::CommandResult;

pub async fn run(args: &NewsArgs, api: &StockApi) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let articles = api.news(&symbol, args.limit).await?;

    let mut table = Vec::new();
    if articles.is_empty() {
        table.push(format!("no recent news for {symbol}"));
    }
    for article in &articles {
        table.push(format!(
            "[{}] {} — {}",
            article.published_at, article.title, article.source
        ));
        if let Some(summary) = &article.summary {
            table.push(format!("  {summary}"));
        }
        table.push(format!("  {}", article.url));
    }

    Ok(CommandResult::new(serde_json::to_value(&articles)?).with_table(table))
}
