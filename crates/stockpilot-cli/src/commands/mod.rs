mod analysis;
mod chart;
mod fundamentals;
mod health;
mod learn;
mod news;
mod quote;
mod search;
mod theme;
mod watch;

use crate::cli::{Cli, Command};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output::CommandResult;

pub async fn run(cli: &Cli, context: &AppContext) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Search(args) => search::run(args, &context.api).await,
        Command::Quote(args) => quote::run(args, &context.api).await,
        Command::Chart(args) => chart::run(args, &context.api).await,
        Command::Fundamentals(args) => fundamentals::run(args, &context.api).await,
        Command::News(args) => news::run(args, &context.api).await,
        Command::Analysis(args) => analysis::run(args, &context.api).await,
        Command::Watch(args) => watch::run(args, context).await,
        Command::Theme(args) => theme::run(args, context),
        Command::Learn(args) => learn::run(args),
        Command::Health => health::run(&context.api).await,
    }
}
