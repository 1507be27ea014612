//! CLI argument definitions for StockPilot.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Search instruments by symbol or name |
//! | `quote` | Fetch the latest quote for a symbol |
//! | `chart` | Fetch historical prices over a range |
//! | `fundamentals` | Fetch company fundamentals |
//! | `news` | Fetch recent news articles |
//! | `analysis` | Fetch the risk/volatility summary |
//! | `watch` | Manage the persisted watchlist |
//! | `theme` | Show or change the dark/light preference |
//! | `learn` | Glossary and metric explanations |
//! | `health` | Check API liveness |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | `$STOCKPILOT_API_URL` | Remote API base URL |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--data-dir` | `$STOCKPILOT_DATA_DIR` | Local store directory |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// StockPilot - terminal stock dashboard
///
/// Search, quotes, fundamentals, charts, and news from a remote stock API,
/// plus a locally persisted watchlist and a beginner's glossary.
#[derive(Debug, Parser)]
#[command(
    name = "stockpilot",
    author,
    version,
    about = "Terminal stock dashboard",
    long_about = "StockPilot is a terminal client for a remote stock-information API.\n\
\n\
  • Search instruments, fetch quotes, fundamentals, charts, and news\n\
  • Keep a locally persisted watchlist across sessions\n\
  • Learn page with a glossary of market terms\n\
\n\
Use 'stockpilot <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Remote API base URL.
    ///
    /// Falls back to $STOCKPILOT_API_URL, then http://localhost:8080/api/stocks.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Directory holding the local store file.
    ///
    /// Falls back to $STOCKPILOT_DATA_DIR, then ~/.stockpilot.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-oriented table/lines for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for instruments by symbol or company name.
    ///
    /// # Examples
    ///
    ///   stockpilot search apple
    ///   stockpilot search micro --limit 10
    Search(SearchArgs),

    /// Fetch the latest quote for a symbol.
    ///
    /// # Examples
    ///
    ///   stockpilot quote AAPL
    ///   stockpilot quote MSFT --format json --pretty
    Quote(QuoteArgs),

    /// Fetch historical prices over a named range.
    ///
    /// # Examples
    ///
    ///   stockpilot chart AAPL
    ///   stockpilot chart AAPL --range 5y
    Chart(ChartArgs),

    /// Fetch the company fundamentals snapshot.
    ///
    /// # Examples
    ///
    ///   stockpilot fundamentals AAPL
    Fundamentals(FundamentalsArgs),

    /// Fetch recent news articles for a symbol.
    ///
    /// # Examples
    ///
    ///   stockpilot news AAPL
    ///   stockpilot news AAPL --limit 5
    News(NewsArgs),

    /// Fetch the server-computed risk/volatility summary.
    ///
    /// # Examples
    ///
    ///   stockpilot analysis AAPL
    ///   stockpilot analysis AAPL --range 6mo
    Analysis(AnalysisArgs),

    /// Manage the persisted watchlist.
    Watch(WatchArgs),

    /// Show or change the dark/light theme preference.
    Theme(ThemeArgs),

    /// Glossary of market terms and metric explanations.
    ///
    /// # Examples
    ///
    ///   stockpilot learn
    ///   stockpilot learn --term beta
    Learn(LearnArgs),

    /// Check API liveness.
    Health,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search query (symbol or company name).
    pub query: String,

    /// Maximum number of results to display (0 = everything returned).
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Market symbol (e.g., AAPL).
    pub symbol: String,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol to chart.
    pub symbol: String,

    /// Historical window: 1d, 5d, 1mo, 6mo, 1y, 5y.
    #[arg(long, default_value = "1mo")]
    pub range: String,
}

/// Arguments for the `fundamentals` command.
#[derive(Debug, Args)]
pub struct FundamentalsArgs {
    /// Market symbol.
    pub symbol: String,
}

/// Arguments for the `news` command.
#[derive(Debug, Args)]
pub struct NewsArgs {
    /// Market symbol.
    pub symbol: String,

    /// Number of articles to request (server caps at 50).
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the `analysis` command.
#[derive(Debug, Args)]
pub struct AnalysisArgs {
    /// Market symbol.
    pub symbol: String,

    /// Historical window backing the analysis: 1d, 5d, 1mo, 6mo, 1y, 5y.
    #[arg(long, default_value = "1y")]
    pub range: String,
}

/// Arguments for the `watch` command group.
#[derive(Debug, Args)]
pub struct WatchArgs {
    #[command(subcommand)]
    pub command: WatchCommand,
}

/// Watchlist subcommands.
#[derive(Debug, Subcommand)]
pub enum WatchCommand {
    /// Add a symbol (fetches the current quote to populate the row).
    Add {
        /// Market symbol to add.
        symbol: String,
    },

    /// Remove a symbol.
    Remove {
        /// Market symbol to remove.
        symbol: String,
    },

    /// List the watchlist.
    List {
        /// Refresh each row with a live quote (rows with failed fetches
        /// fall back to their stored values).
        #[arg(long, default_value_t = false)]
        live: bool,
    },

    /// Remove every symbol.
    Clear,
}

/// Arguments for the `theme` command group.
#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

/// Theme subcommands.
#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme.
    Show,

    /// Flip between dark and light.
    Toggle,

    /// Set the theme explicitly.
    Set {
        #[arg(value_enum)]
        theme: ThemeChoice,
    },
}

/// Theme values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// Arguments for the `learn` command.
#[derive(Debug, Args)]
pub struct LearnArgs {
    /// Show only glossary entries matching this term.
    #[arg(long)]
    pub term: Option<String>,
}
