//! Configuration for the fraud engine
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML
//! policy file, `FRAUD_ENGINE__<SECTION>__<KEY>` environment variables, and
//! the legacy `BLOCKED_IPS` / `DISPOSABLE_EMAIL_DOMAINS` lists. List keys
//! take comma-separated values; an empty legacy list is ignored.

use crate::types::SignalKind;
use crate::{Error, Result};
use config::{Environment, Map};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Environment prefix for layered settings
pub const ENV_PREFIX: &str = "FRAUD_ENGINE";

/// Legacy comma-separated IP denylist variable
pub const BLOCKED_IPS_VAR: &str = "BLOCKED_IPS";

/// Comma-separated disposable domain list variable
pub const DISPOSABLE_DOMAINS_VAR: &str = "DISPOSABLE_EMAIL_DOMAINS";

/// Config key holding the IP denylist
const BLOCKED_IPS_KEY: &str = "denylist.blocked_ips";

/// Config key holding the disposable domain list
const DISPOSABLE_DOMAINS_KEY: &str = "email.disposable_domains";

/// Floor for the high-value threshold
const HIGH_VALUE_FLOOR: Decimal = dec!(1000);

/// Floor for the large-cart threshold
const LARGE_CART_FLOOR: u32 = 10;

/// Domains treated as disposable when nothing else is configured
pub const DEFAULT_DISPOSABLE_DOMAINS: &[&str] = &[
    "tempmail.com",
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "yopmail.com",
    "trashmail.com",
    "throwawaymail.com",
    "sharklasers.com",
    "getnada.com",
    "dispostable.com",
];

/// Fraud engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudConfig {
    /// Amount and cart thresholds
    pub risk_factors: RiskFactors,

    /// Weight per signal
    pub weights: SignalWeights,

    /// Score boundaries of the decision tiers
    pub decision: DecisionThresholds,

    /// IP denylist
    pub denylist: DenylistConfig,

    /// Email classification
    pub email: EmailConfig,
}

/// Tunable thresholds the signal evaluators compare against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactors {
    /// `high_value` fires above this amount
    pub high_value_threshold: Decimal,

    /// `new_customer_high_value` fires above this amount for new customers
    pub new_customer_high_value_threshold: Decimal,

    /// `large_cart` fires above this item count
    pub large_cart_threshold: u32,
}

impl Default for RiskFactors {
    fn default() -> Self {
        Self {
            high_value_threshold: dec!(5000),
            new_customer_high_value_threshold: dec!(1000),
            large_cart_threshold: 12,
        }
    }
}

/// Weight table, one entry per [`SignalKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Weight of `high_value`
    pub high_value: u8,
    /// Weight of `new_customer_high_value`
    pub new_customer_high_value: u8,
    /// Weight of `address_country_mismatch`
    pub address_country_mismatch: u8,
    /// Weight of `large_cart`
    pub large_cart: u8,
    /// Weight of `email_alias`
    pub email_alias: u8,
    /// Weight of `disposable_email`
    pub disposable_email: u8,
}

impl SignalWeights {
    /// Weight contributed by a signal
    pub fn weight_of(&self, kind: SignalKind) -> u8 {
        match kind {
            SignalKind::HighValue => self.high_value,
            SignalKind::NewCustomerHighValue => self.new_customer_high_value,
            SignalKind::AddressCountryMismatch => self.address_country_mismatch,
            SignalKind::LargeCart => self.large_cart,
            SignalKind::EmailAlias => self.email_alias,
            SignalKind::DisposableEmail => self.disposable_email,
        }
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            high_value: 30,
            new_customer_high_value: 20,
            address_country_mismatch: 25,
            large_cart: 15,
            email_alias: 10,
            disposable_email: 15,
        }
    }
}

/// Lower bounds (inclusive) of the review and block tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Scores at or above this are at least `review`
    pub review_at: u8,

    /// Scores at or above this are `block`
    pub block_at: u8,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            review_at: 30,
            block_at: 60,
        }
    }
}

/// IP denylist configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DenylistConfig {
    /// Exact-match client IPs
    pub blocked_ips: Vec<String>,
}

/// Email classification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Known throwaway mail domains
    pub disposable_domains: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            disposable_domains: DEFAULT_DISPOSABLE_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl FraudConfig {
    /// Load from the process environment on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::load(None, std::env::vars())
    }

    /// Parse a TOML policy file body; missing sections keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: FraudConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML policy file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Layer environment variables over an optional policy file.
    ///
    /// `vars` is the environment to read; pass `std::env::vars()` in
    /// production or a fixed list in tests.
    pub fn load<I>(file: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let vars: Map<String, String> = vars.into_iter().collect();

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&base)?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key(BLOCKED_IPS_KEY)
                    .with_list_parse_key(DISPOSABLE_DOMAINS_KEY)
                    .source(Some(vars.clone())),
            );

        for (var, key) in [
            (BLOCKED_IPS_VAR, BLOCKED_IPS_KEY),
            (DISPOSABLE_DOMAINS_VAR, DISPOSABLE_DOMAINS_KEY),
        ] {
            let Some(raw) = vars.get(var) else {
                continue;
            };

            let entries = split_list(raw);
            if entries.is_empty() {
                warn!("{} is set but empty; keeping configured {}", var, key);
                continue;
            }
            builder = builder.set_override(key, entries)?;
        }

        let config: FraudConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the startup invariants
    pub fn validate(&self) -> Result<()> {
        let factors = &self.risk_factors;

        if factors.high_value_threshold <= HIGH_VALUE_FLOOR {
            return Err(Error::InvalidConfig(format!(
                "high_value_threshold {} must be greater than {}",
                factors.high_value_threshold, HIGH_VALUE_FLOOR
            )));
        }

        if factors.new_customer_high_value_threshold >= factors.high_value_threshold {
            return Err(Error::InvalidConfig(format!(
                "new_customer_high_value_threshold {} must be below high_value_threshold {}",
                factors.new_customer_high_value_threshold, factors.high_value_threshold
            )));
        }

        if factors.new_customer_high_value_threshold.is_sign_negative() {
            return Err(Error::InvalidConfig(
                "new_customer_high_value_threshold must not be negative".to_string(),
            ));
        }

        if factors.large_cart_threshold <= LARGE_CART_FLOOR {
            return Err(Error::InvalidConfig(format!(
                "large_cart_threshold {} must be greater than {}",
                factors.large_cart_threshold, LARGE_CART_FLOOR
            )));
        }

        let decision = &self.decision;
        if decision.review_at == 0
            || decision.review_at >= decision.block_at
            || decision.block_at > 100
        {
            return Err(Error::InvalidConfig(format!(
                "decision thresholds must satisfy 0 < review_at ({}) < block_at ({}) <= 100",
                decision.review_at, decision.block_at
            )));
        }

        for kind in SignalKind::ALL {
            if self.weights.weight_of(kind) > 100 {
                return Err(Error::InvalidConfig(format!(
                    "weight of {} exceeds 100",
                    kind
                )));
            }
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
