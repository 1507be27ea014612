use serde_json::json;

use stockpilot_store::Theme;

use crate::cli::{ThemeArgs, ThemeChoice, ThemeCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output::CommandResult;

pub fn run(args: &ThemeArgs, context: &AppContext) -> Result<CommandResult, CliError> {
    let store = &context.theme;

    match &args.command {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => store.toggle(),
        ThemeCommand::Set { theme } => store.set(match theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }),
    }

    let current = store.current();
    let table = vec![format!("theme: {}", current.as_str())];
    Ok(CommandResult::new(json!({ "theme": current })).with_table(table))
}
