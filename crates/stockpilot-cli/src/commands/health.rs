use stockpilot_core::StockApi;

use crate::error::CliError;
use crate::format;
use crate::output::CommandResult;

pub async fn run(api: &StockApi) -> Result<CommandResult, CliError> {
    let health = api.health().await?;

    let table = vec![
        format!("status : {}", health.status),
        format!("service: {}", format::or_na(health.service.as_deref())),
        format!("url    : {}", api.base_url()),
    ];

    Ok(CommandResult::new(serde_json::to_value(&health)?).with_table(table))
}
