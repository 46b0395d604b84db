//! Operator guidance derived from triggered signals and the decision tier

use crate::types::{Decision, RiskSignal, SignalKind};

/// Guidance for a single signal
pub fn for_signal(kind: SignalKind) -> &'static str {
    match kind {
        SignalKind::HighValue => "Confirm payment method ownership for high-value order",
        SignalKind::NewCustomerHighValue => {
            "Request additional identity verification for first-time high-value order"
        }
        SignalKind::AddressCountryMismatch => {
            "Verify shipping address matches billing before fulfillment"
        }
        SignalKind::LargeCart => "Check cart for bulk purchase of resellable items",
        SignalKind::EmailAlias => "Check for duplicate accounts using email aliases",
        SignalKind::DisposableEmail => "Require a permanent email address before fulfillment",
    }
}

/// Guidance for a tier; `allow` carries none
pub fn for_decision(decision: Decision) -> Option<&'static str> {
    match decision {
        Decision::Allow => None,
        Decision::Review => Some(REVIEW_RECOMMENDATION),
        Decision::Block => Some(BLOCK_RECOMMENDATION),
    }
}

/// Guidance for the `review` tier
pub const REVIEW_RECOMMENDATION: &str = "Queue for manual review before capture";

/// Guidance for the `block` tier
pub const BLOCK_RECOMMENDATION: &str = "Reject transaction — risk threshold exceeded";

/// Guidance attached to a denylist hit
pub const DENYLIST_RECOMMENDATION: &str =
    "Client IP is denylisted; do not retry with another payment method";

/// Build the recommendation list: one entry per signal, then the tier entry.
///
/// Empty only for a clean `allow` with no signals.
pub fn generate(signals: &[RiskSignal], decision: Decision) -> Vec<String> {
    let mut recommendations: Vec<String> = signals
        .iter()
        .map(|s| for_signal(s.kind).to_string())
        .collect();

    if let Some(tier) = for_decision(decision) {
        recommendations.push(tier.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_allow_is_empty() {
        assert!(generate(&[], Decision::Allow).is_empty());
    }

    #[test]
    fn test_signal_under_allow_still_recommends() {
        let signals = [RiskSignal {
            kind: SignalKind::EmailAlias,
            weight: 10,
        }];
        let recs = generate(&signals, Decision::Allow);

        assert_eq!(recs, vec![for_signal(SignalKind::EmailAlias).to_string()]);
    }

    #[test]
    fn test_tier_entry_comes_last() {
        let signals = [RiskSignal {
            kind: SignalKind::AddressCountryMismatch,
            weight: 25,
        }];
        let recs = generate(&signals, Decision::Review);

        assert_eq!(recs.len(), 2);
        assert_eq!(
            recs[0],
            "Verify shipping address matches billing before fulfillment"
        );
        assert_eq!(recs[1], "Queue for manual review before capture");
    }

    #[test]
    fn test_block_without_signals_recommends() {
        let recs = generate(&[], Decision::Block);
        assert_eq!(recs, vec![BLOCK_RECOMMENDATION]);
        assert_eq!(for_decision(Decision::Block), Some(BLOCK_RECOMMENDATION));
    }
}
