use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// What a command hands back for rendering: a JSON payload plus the lines
/// its table view prints.
pub struct CommandResult {
    pub data: Value,
    pub table: Vec<String>,
}

impl CommandResult {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            table: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Vec<String>) -> Self {
        self.table = table;
        self
    }
}

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            if result.table.is_empty() {
                // Commands without a table view fall back to pretty JSON.
                println!("{}", serde_json::to_string_pretty(&result.data)?);
            } else {
                for line in &result.table {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
