//! Education page: glossary of market terms and metric explanations.

use serde::Serialize;

use crate::cli::LearnArgs;
use crate::error::CliError;
use crate::output::CommandResult;

#[derive(Debug, Clone, Copy, Serialize)]
struct GlossaryTerm {
    term: &'static str,
    definition: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<&'static str>,
}

const GLOSSARY: &[GlossaryTerm] = &[
    GlossaryTerm {
        term: "Stock",
        definition: "A share of ownership in a company. When you buy stock, you become a partial owner.",
        example: Some("Buying 10 shares of Apple means you own a tiny piece of Apple Inc."),
    },
    GlossaryTerm {
        term: "Price",
        definition: "The current market value of one share. This changes throughout the trading day based on supply and demand.",
        example: None,
    },
    GlossaryTerm {
        term: "Market Cap",
        definition: "Market Capitalization - the total value of all company shares. Calculated as share price times total shares outstanding.",
        example: Some("If a company has 1 million shares at $50 each, market cap is $50 million."),
    },
    GlossaryTerm {
        term: "P/E Ratio",
        definition: "Price-to-Earnings ratio. Shows how much investors pay for each dollar of earnings. Lower can mean better value.",
        example: Some("P/E of 20 means investors pay $20 for every $1 of annual earnings."),
    },
    GlossaryTerm {
        term: "EPS",
        definition: "Earnings Per Share - company profit divided by number of shares. Higher EPS generally indicates better profitability.",
        example: None,
    },
    GlossaryTerm {
        term: "Dividend",
        definition: "A portion of company profits paid to shareholders, usually quarterly. Not all companies pay dividends.",
        example: None,
    },
    GlossaryTerm {
        term: "Dividend Yield",
        definition: "Annual dividend payment as a percentage of stock price. Shows income return from dividends.",
        example: Some("A $100 stock paying $3/year in dividends has a 3% yield."),
    },
    GlossaryTerm {
        term: "Beta",
        definition: "Measures stock volatility compared to the overall market. Beta above 1 means more volatile; below 1 means less volatile.",
        example: Some("Beta of 1.5 means the stock typically moves 50% more than the market."),
    },
    GlossaryTerm {
        term: "Volatility",
        definition: "The degree of price fluctuation. High volatility means larger price swings and higher risk.",
        example: None,
    },
    GlossaryTerm {
        term: "Max Drawdown",
        definition: "Largest peak-to-trough decline over a period. Shows the worst-case loss scenario.",
        example: None,
    },
    GlossaryTerm {
        term: "Bull Market",
        definition: "A market condition where prices are rising or expected to rise. Opposite of bear market.",
        example: None,
    },
    GlossaryTerm {
        term: "Bear Market",
        definition: "A market condition where prices fall 20% or more from recent highs. Signals investor pessimism.",
        example: None,
    },
    GlossaryTerm {
        term: "Portfolio",
        definition: "A collection of investments owned by an individual or institution. Diversification reduces risk.",
        example: None,
    },
    GlossaryTerm {
        term: "Watchlist",
        definition: "A user-curated list of ticker symbols tracked for quick reference.",
        example: None,
    },
    GlossaryTerm {
        term: "52-Week High/Low",
        definition: "The highest and lowest prices at which a stock has traded during the past year.",
        example: None,
    },
];

pub fn run(args: &LearnArgs) -> Result<CommandResult, CliError> {
    let needle = args.term.as_deref().map(str::to_ascii_lowercase);
    let entries: Vec<GlossaryTerm> = GLOSSARY
        .iter()
        .filter(|entry| match &needle {
            Some(needle) => entry.term.to_ascii_lowercase().contains(needle),
            None => true,
        })
        .copied()
        .collect();

    let mut table = Vec::new();
    if entries.is_empty() {
        table.push(format!(
            "no glossary entry matching '{}'",
            args.term.as_deref().unwrap_or_default()
        ));
    }
    for entry in &entries {
        table.push(entry.term.to_string());
        table.push(format!("  {}", entry.definition));
        if let Some(example) = entry.example {
            table.push(format!("  e.g. {example}"));
        }
        table.push(String::new());
    }

    Ok(CommandResult::new(serde_json::to_value(&entries)?).with_table(table))
}
