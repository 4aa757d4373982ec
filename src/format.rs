//! Amount formatting for display
//!
//! Amounts arrive as satoshis and are rendered in the configured currency.

use crate::error::ConfigError;
use std::str::FromStr;

const SATS_PER_BTC: f64 = 100_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Currency {
    Sat,
    Btc,
    Fiat { symbol: String, price_per_btc: f64 },
}

impl FromStr for Currency {
    type Err = ConfigError;

    /// Parses `sat` and `btc`. Fiat needs a price and is built by the config.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sat" | "sats" => Ok(Currency::Sat),
            "btc" => Ok(Currency::Btc),
            other => Err(ConfigError::InvalidValue(format!("unknown currency '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountFormatter {
    pub currency: Currency,
    /// When false every amount renders as "-"
    pub display_values: bool,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self {
            currency: Currency::Sat,
            display_values: true,
        }
    }
}

impl AmountFormatter {
    pub fn new(currency: Currency, display_values: bool) -> Self {
        Self {
            currency,
            display_values,
        }
    }

    pub fn format(&self, amount: u64, no_unit: bool) -> String {
        if !self.display_values {
            return "-".to_string();
        }
        if no_unit {
            return group_thousands(amount);
        }

        match &self.currency {
            Currency::Sat => format!("{} sats", group_thousands(amount)),
            Currency::Btc => format!("{:.8} ₿", amount as f64 / SATS_PER_BTC),
            Currency::Fiat { symbol, price_per_btc } => {
                let value = format!("{:.2}", amount as f64 / SATS_PER_BTC * price_per_btc);
                let (whole, cents) = value.split_once('.').unwrap_or((value.as_str(), "00"));
                format!("{}{}.{}", symbol, group_digits(whole), cents)
            }
        }
    }
}

fn group_thousands(amount: u64) -> String {
    group_digits(&amount.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
