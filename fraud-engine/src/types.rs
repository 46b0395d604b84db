//! Core types for the fraud engine

use crate::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address fields the engine looks at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Country code (e.g. "MX")
    pub country: String,

    /// Postal code
    #[serde(default)]
    pub postal_code: String,
}

impl Address {
    /// Create an address
    pub fn new(country: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Transaction as seen at checkout, built by the caller from cart and session data.
///
/// Validation (non-negative amount, well-formed fields) happens before this
/// value reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    /// Amount in the store's major currency unit
    pub amount: Decimal,

    /// Currency code, informational only
    pub currency: String,

    /// Customer identifier
    pub user_id: String,

    /// Customer email
    pub email: String,

    /// Client IP address
    pub ip: String,

    /// Client user agent
    #[serde(default)]
    pub user_agent: String,

    /// Shipping address
    #[serde(default)]
    pub shipping_address: Option<Address>,

    /// Billing address
    #[serde(default)]
    pub billing_address: Option<Address>,

    /// First order for this customer
    #[serde(default)]
    pub is_new_customer: bool,

    /// Number of earlier orders
    #[serde(default)]
    pub previous_orders: u32,

    /// Number of items in the cart
    #[serde(default)]
    pub cart_items: u32,
}

impl TransactionData {
    /// Decode a transaction from its JSON wire form
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Risk score (0-100)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Highest possible score
    pub const MAX: RiskScore = RiskScore(100);

    /// Create new risk score, saturating at 100
    pub fn new(score: u32) -> Self {
        Self(score.min(100) as u8)
    }

    /// Get raw score
    pub fn score(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decision tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Proceed to capture
    Allow,
    /// Hold for manual review
    Review,
    /// Reject the transaction
    Block,
}

impl Decision {
    /// Wire name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Review => "review",
            Decision::Block => "block",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of risk signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Amount above the high-value threshold
    HighValue,
    /// First-time customer above the new-customer threshold
    NewCustomerHighValue,
    /// Shipping and billing countries differ
    AddressCountryMismatch,
    /// Cart item count above the large-cart threshold
    LargeCart,
    /// Email local part uses a `+tag`
    EmailAlias,
    /// Email domain is a known throwaway provider
    DisposableEmail,
}

impl SignalKind {
    /// Every signal, in evaluation order
    pub const ALL: [SignalKind; 6] = [
        SignalKind::HighValue,
        SignalKind::NewCustomerHighValue,
        SignalKind::AddressCountryMismatch,
        SignalKind::LargeCart,
        SignalKind::EmailAlias,
        SignalKind::DisposableEmail,
    ];

    /// Wire name of the signal
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::HighValue => "high_value",
            SignalKind::NewCustomerHighValue => "new_customer_high_value",
            SignalKind::AddressCountryMismatch => "address_country_mismatch",
            SignalKind::LargeCart => "large_cart",
            SignalKind::EmailAlias => "email_alias",
            SignalKind::DisposableEmail => "disposable_email",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triggered signal and the weight it contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskSignal {
    /// Which signal fired
    #[serde(rename = "type")]
    pub kind: SignalKind,

    /// Weight added to the score
    pub weight: u8,
}

/// Outcome of a fraud check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudCheckResult {
    /// Clamped score
    pub score: RiskScore,

    /// Decision tier
    pub decision: Decision,

    /// Signals that fired, in evaluation order
    pub signals: Vec<RiskSignal>,

    /// Advisory strings for operators
    pub recommendations: Vec<String>,

    /// Client IP hit the denylist; scoring was skipped
    #[serde(default)]
    pub denylisted: bool,
}

impl FraudCheckResult {
    /// Whether a given signal fired
    pub fn has_signal(&self, kind: SignalKind) -> bool {
        self.signals.iter().any(|s| s.kind == kind)
    }
}
