use std::fmt;
use std::str::FromStr;

use crate::errors::MarketDataError;

/// History range requested from a provider.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Period {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Period {
    pub const ALL: [Period; 11] = [
        Period::D1,
        Period::D5,
        Period::M1,
        Period::M3,
        Period::M6,
        Period::Y1,
        Period::Y2,
        Period::Y5,
        Period::Y10,
        Period::Ytd,
        Period::Max,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::D1 => "1d",
            Period::D5 => "5d",
            Period::M1 => "1mo",
            Period::M3 => "3mo",
            Period::M6 => "6mo",
            Period::Y1 => "1y",
            Period::Y2 => "2y",
            Period::Y5 => "5y",
            Period::Y10 => "10y",
            Period::Ytd => "ytd",
            Period::Max => "max",
        }
    }
}

impl FromStr for Period {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MarketDataError::InvalidParams(format!("unsupported period '{s}'")))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar size requested from a provider.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    pub const ALL: [Interval; 13] = [
        Interval::I1m,
        Interval::I2m,
        Interval::I5m,
        Interval::I15m,
        Interval::I30m,
        Interval::I60m,
        Interval::I90m,
        Interval::I1h,
        Interval::D1,
        Interval::D5,
        Interval::W1,
        Interval::M1,
        Interval::M3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I2m => "2m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I60m => "60m",
            Interval::I90m => "90m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::D5 => "5d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
            Interval::M3 => "3mo",
        }
    }
}

impl FromStr for Interval {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "1m" and "1mo" differ only by suffix, so match exactly (case-sensitive).
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s.trim())
            .ok_or_else(|| MarketDataError::InvalidParams(format!("unsupported interval '{s}'")))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
