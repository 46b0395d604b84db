//! What the checkout service does with a fraud decision

use crate::types::{Decision, FraudCheckResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message shown to a customer whose order is held
pub const REVIEW_MESSAGE: &str = "Your order has been received and is pending confirmation.";

/// Message shown to a customer whose order is rejected
pub const DENIAL_MESSAGE: &str = "We were unable to process your payment. Please contact support.";

/// Checkout action for a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutAction {
    /// Capture payment and continue
    Proceed,
    /// Queue the order for manual inspection, no capture yet
    HoldForReview,
    /// Reject the transaction
    Reject,
}

impl From<Decision> for CheckoutAction {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => CheckoutAction::Proceed,
            Decision::Review => CheckoutAction::HoldForReview,
            Decision::Block => CheckoutAction::Reject,
        }
    }
}

impl CheckoutAction {
    /// Whether payment may be captured right away
    pub fn captures_payment(&self) -> bool {
        matches!(self, CheckoutAction::Proceed)
    }
}

/// Customer-facing outcome.
///
/// Carries no score or signal, so callers cannot infer the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOutcome {
    /// Action to take
    pub action: CheckoutAction,

    /// Generic message for the customer, if any
    pub customer_message: Option<&'static str>,
}

impl CheckoutOutcome {
    /// Outcome for a fraud check result
    pub fn from_result(result: &FraudCheckResult) -> Self {
        let action = CheckoutAction::from(result.decision);
        let customer_message = match action {
            CheckoutAction::Proceed => None,
            CheckoutAction::HoldForReview => Some(REVIEW_MESSAGE),
            CheckoutAction::Reject => Some(DENIAL_MESSAGE),
        };

        Self {
            action,
            customer_message,
        }
    }
}

/// Fraud check result with audit metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Check ID
    pub check_id: Uuid,

    /// Customer the check ran for
    pub user_id: String,

    /// Check result
    pub result: FraudCheckResult,

    /// Action checkout should take
    pub action: CheckoutAction,

    /// Assessment timestamp
    pub assessed_at: DateTime<Utc>,
}

impl FraudAssessment {
    /// Wrap a result
    pub fn new(user_id: &str, result: FraudCheckResult) -> Self {
        Self {
            check_id: Uuid::now_v7(),
            user_id: user_id.to_string(),
            action: CheckoutAction::from(result.decision),
            result,
            assessed_at: Utc::now(),
        }
    }
}
