use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

// Longest ticker the remote API serves, with headroom for class-share
// (`BRK.B`) and exchange-suffixed (`RDS-A`) listings.
const MAX_SYMBOL_LEN: usize = 15;

/// Market ticker, normalized to uppercase.
///
/// A ticker starts with a letter; after that, letters, digits, `.` and
/// `-` are allowed, so plain tickers (`AAPL`), class shares (`BRK.B`),
/// and suffixed listings (`RDS-A`) all parse to the same canonical form
/// the API expects in its path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a ticker, trimming whitespace and uppercasing.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            match ch {
                'A'..='Z' => {}
                '0'..='9' | '.' | '-' if index > 0 => {}
                _ if index == 0 => {
                    return Err(ValidationError::SymbolInvalidStart { ch });
                }
                _ => {
                    return Err(ValidationError::SymbolInvalidChar { ch, index });
                }
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
