use crate::error::ConfigError;
use crate::format::{AmountFormatter, Currency};
use crate::forward_core::OrderKey;
use std::collections::HashMap;
use std::env;

/// Where forwards are loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Http { base_url: String, token: Option<String> },
    File { path: String },
}

/// Configuration loaded from environment variables and command line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: SourceConfig,
    pub days: u32,
    pub order: OrderKey,
    pub formatter: AmountFormatter,
    pub ui_refresh_ms: u64,
    /// Print the table once instead of starting the terminal UI
    pub print_only: bool,
}

impl Config {
    /// Load configuration from the process environment and arguments
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars().collect();
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_vars(&vars, &args)
    }

    /// Environment variables:
    /// - `FORWARDS_URL` or `FORWARDS_FILE` (one required, URL wins)
    /// - `FORWARDS_TOKEN` (optional bearer token)
    /// - `FORWARDS_DAYS` (default: 7)
    /// - `FORWARDS_ORDER` (default: amount)
    /// - `CURRENCY` (default: sat), `FIAT_SYMBOL` (default: $), `FIAT_PRICE`
    /// - `DISPLAY_VALUES` (default: true)
    /// - `UI_REFRESH_MS` (default: 250)
    ///
    /// Flags `--days N`, `--order KEY` and `--print` override the environment.
    pub fn from_vars(vars: &HashMap<String, String>, args: &[String]) -> Result<Self, ConfigError> {
        let var = |name: &str| vars.get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let source = match (var("FORWARDS_URL"), var("FORWARDS_FILE")) {
            (Some(base_url), _) => {
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(ConfigError::InvalidValue(
                        "FORWARDS_URL must start with http:// or https://".to_string(),
                    ));
                }
                SourceConfig::Http {
                    base_url,
                    token: var("FORWARDS_TOKEN"),
                }
            }
            (None, Some(path)) => SourceConfig::File { path },
            (None, None) => return Err(ConfigError::MissingVariable("FORWARDS_URL or FORWARDS_FILE".to_string())),
        };

        let days_raw = flag_value(args, "--days")?.or_else(|| var("FORWARDS_DAYS"));
        let days = match days_raw {
            Some(raw) => parse_days(&raw)?,
            None => 7,
        };

        let order = flag_value(args, "--order")?
            .or_else(|| var("FORWARDS_ORDER"))
            .map(|raw| OrderKey::from_param(&raw))
            .unwrap_or_default();

        let currency = match var("CURRENCY").as_deref().map(str::to_lowercase).as_deref() {
            None => Currency::Sat,
            Some("fiat") => {
                let price_raw = var("FIAT_PRICE").ok_or_else(|| ConfigError::MissingVariable("FIAT_PRICE".to_string()))?;
                let price_per_btc = price_raw
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite() && *p > 0.0)
                    .ok_or_else(|| ConfigError::InvalidValue(format!("FIAT_PRICE must be a positive number, got '{}'", price_raw)))?;
                Currency::Fiat {
                    symbol: var("FIAT_SYMBOL").unwrap_or_else(|| "$".to_string()),
                    price_per_btc,
                }
            }
            Some(other) => other.parse()?,
        };

        let display_values = var("DISPLAY_VALUES")
            .and_then(|s| s.to_lowercase().parse::<bool>().ok())
            .unwrap_or(true);

        let ui_refresh_ms = var("UI_REFRESH_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(250);

        Ok(Self {
            source,
            days,
            order,
            formatter: AmountFormatter::new(currency, display_values),
            ui_refresh_ms,
            print_only: args.iter().any(|a| a == "--print"),
        })
    }
}

/// Value following `flag`. A flag given without a value is an error.
fn flag_value(args: &[String], flag: &str) -> Result<Option<String>, ConfigError> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(idx + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.clone())),
        _ => Err(ConfigError::InvalidValue(format!("{} requires a value", flag))),
    }
}

fn parse_days(raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(days) if days >= 1 => Ok(days),
        _ => Err(ConfigError::InvalidValue(format!(
            "days must be a positive integer, got '{}'",
            raw
        ))),
    }
}
