use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Named historical window used to bound chart and analysis queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
}

impl ChartRange {
    pub const ALL: [Self; 6] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::SixMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
        }
    }

    /// Short label used by chart range selectors.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
        }
    }
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "5d" => Ok(Self::FiveDays),
            "1mo" | "1m" => Ok(Self::OneMonth),
            "6mo" | "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "5y" => Ok(Self::FiveYears),
            other => Err(ValidationError::InvalidRange {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range() {
        let range = ChartRange::from_str("6mo").expect("must parse");
        assert_eq!(range, ChartRange::SixMonths);
    }

    #[test]
    fn parses_server_style_month_alias() {
        // The remote API defaults to "1M"; accept that spelling on input.
        let range = ChartRange::from_str("1M").expect("must parse");
        assert_eq!(range, ChartRange::OneMonth);
    }

    #[test]
    fn rejects_invalid_range() {
        let err = ChartRange::from_str("2w").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
    }
}
