//! Runtime settings from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `TABLE_ORDER_TAX_RATE` | `0.08` |
//! | `TABLE_ORDER_SUBMIT_DELAY_MS` | `1500` |
//! | `TABLE_ORDER_CHANNEL_BUFFER` | `32` |
//! | `TABLE_ORDER_TOP_ITEMS` | `5` |

use crate::model::TaxRate;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

pub const TAX_RATE: &str = "TABLE_ORDER_TAX_RATE";
pub const SUBMIT_DELAY_MS: &str = "TABLE_ORDER_SUBMIT_DELAY_MS";
pub const CHANNEL_BUFFER: &str = "TABLE_ORDER_CHANNEL_BUFFER";
pub const TOP_ITEMS: &str = "TABLE_ORDER_TOP_ITEMS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tax_rate: TaxRate,
    /// How long the order book takes to accept an order.
    pub submit_delay: Duration,
    /// Mailbox size of every actor. At least 1.
    pub channel_buffer: usize,
    /// Length of the dashboard's best-seller list.
    pub top_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::default(),
            submit_delay: Duration::from_millis(1500),
            channel_buffer: 32,
            top_items: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_buffer: usize = try_load(&lookup, CHANNEL_BUFFER, "32")?;
        if channel_buffer == 0 {
            return Err(ConfigError {
                key: CHANNEL_BUFFER,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            tax_rate: try_load(&lookup, TAX_RATE, "0.08")?,
            submit_delay: Duration::from_millis(try_load(&lookup, SUBMIT_DELAY_MS, "1500")?),
            channel_buffer,
            top_items: try_load(&lookup, TOP_ITEMS, "5")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            (TAX_RATE, "0.0825"),
            (SUBMIT_DELAY_MS, " 10 "),
            (CHANNEL_BUFFER, "4"),
            (TOP_ITEMS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.tax_rate.rate(), Decimal::new(825, 4));
        assert_eq!(config.submit_delay, Duration::from_millis(10));
        assert_eq!(config.channel_buffer, 4);
        assert_eq!(config.top_items, 3);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[(TAX_RATE, "8%")])).unwrap_err();
        assert_eq!(err.key, TAX_RATE);
        assert_eq!(err.value, "8%");

        let err = Config::from_lookup(lookup(&[(TAX_RATE, "8")])).unwrap_err();
        assert_eq!(err.reason, "tax rate 8 is outside 0..=1");

        let err = Config::from_lookup(lookup(&[(CHANNEL_BUFFER, "0")])).unwrap_err();
        assert_eq!(err.key, CHANNEL_BUFFER);
    }
}
