//! Signal evaluators
//!
//! Each evaluator is an independent predicate over the transaction. All
//! evaluators run; order does not affect the outcome.

use crate::config::{RiskFactors, SignalWeights};
use crate::email::{self, DisposableDomains};
use crate::types::{RiskSignal, SignalKind, TransactionData};
use tracing::debug;

/// Read-only inputs the evaluators compare against
#[derive(Debug, Clone, Copy)]
pub struct SignalContext<'a> {
    /// Amount and cart thresholds
    pub factors: &'a RiskFactors,

    /// Disposable domain set
    pub disposable_domains: &'a DisposableDomains,
}

/// Predicate deciding whether a signal fires
type Evaluator = fn(&TransactionData, &SignalContext<'_>) -> bool;

/// Evaluator table; adding a signal means adding a row here and a weight
const EVALUATORS: [(SignalKind, Evaluator); 6] = [
    (SignalKind::HighValue, high_value),
    (SignalKind::NewCustomerHighValue, new_customer_high_value),
    (SignalKind::AddressCountryMismatch, address_country_mismatch),
    (SignalKind::LargeCart, large_cart),
    (SignalKind::EmailAlias, email_alias),
    (SignalKind::DisposableEmail, disposable_email),
];

fn high_value(tx: &TransactionData, ctx: &SignalContext<'_>) -> bool {
    tx.amount > ctx.factors.high_value_threshold
}

fn new_customer_high_value(tx: &TransactionData, ctx: &SignalContext<'_>) -> bool {
    tx.is_new_customer && tx.amount > ctx.factors.new_customer_high_value_threshold
}

fn address_country_mismatch(tx: &TransactionData, _ctx: &SignalContext<'_>) -> bool {
    match (&tx.shipping_address, &tx.billing_address) {
        (Some(shipping), Some(billing)) => shipping.country != billing.country,
        _ => false,
    }
}

fn large_cart(tx: &TransactionData, ctx: &SignalContext<'_>) -> bool {
    tx.cart_items > ctx.factors.large_cart_threshold
}

fn email_alias(tx: &TransactionData, _ctx: &SignalContext<'_>) -> bool {
    email::is_plus_alias(&tx.email)
}

fn disposable_email(tx: &TransactionData, ctx: &SignalContext<'_>) -> bool {
    ctx.disposable_domains.is_disposable(&tx.email)
}

/// Run every evaluator and collect the triggered signals with their weights
pub fn evaluate(
    tx: &TransactionData,
    ctx: &SignalContext<'_>,
    weights: &SignalWeights,
) -> Vec<RiskSignal> {
    EVALUATORS
        .iter()
        .filter(|(_, eval)| eval(tx, ctx))
        .map(|(kind, _)| {
            let weight = weights.weight_of(*kind);
            debug!(signal = %kind, weight, user_id = %tx.user_id, "Risk signal triggered");
            RiskSignal {
                kind: *kind,
                weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;
    use rust_decimal_macros::dec;

    fn baseline() -> TransactionData {
        TransactionData {
            amount: dec!(100),
            currency: "MXN".to_string(),
            user_id: "user-1".to_string(),
            email: "buyer@example.com".to_string(),
            ip: "192.168.1.1".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            shipping_address: Some(Address::new("MX", "01000")),
            billing_address: Some(Address::new("MX", "01000")),
            is_new_customer: false,
            previous_orders: 3,
            cart_items: 2,
        }
    }

    fn run(tx: &TransactionData) -> Vec<SignalKind> {
        let factors = RiskFactors::default();
        let domains = DisposableDomains::new(["tempmail.com"]);
        let ctx = SignalContext {
            factors: &factors,
            disposable_domains: &domains,
        };
        evaluate(tx, &ctx, &SignalWeights::default())
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_evaluator_table_covers_every_signal() {
        let kinds: Vec<SignalKind> = EVALUATORS.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, SignalKind::ALL.to_vec());
    }

    #[test]
    fn test_baseline_triggers_nothing() {
        assert!(run(&baseline()).is_empty());
    }

    #[test]
    fn test_high_value_boundary_is_exclusive() {
        let mut tx = baseline();
        tx.amount = dec!(5000);
        assert!(!run(&tx).contains(&SignalKind::HighValue));

        tx.amount = dec!(5000.01);
        assert!(run(&tx).contains(&SignalKind::HighValue));
    }

    #[test]
    fn test_new_customer_high_value_boundary_is_exclusive() {
        let mut tx = baseline();
        tx.is_new_customer = true;

        tx.amount = dec!(1000);
        assert!(run(&tx).is_empty());

        tx.amount = dec!(1000.01);
        assert_eq!(run(&tx), vec![SignalKind::NewCustomerHighValue]);
    }

    #[test]
    fn test_new_customer_high_value_requires_new_customer() {
        let mut tx = baseline();
        tx.amount = dec!(3000);
        assert!(run(&tx).is_empty());

        tx.is_new_customer = true;
        assert_eq!(run(&tx), vec![SignalKind::NewCustomerHighValue]);
    }

    #[test]
    fn test_missing_address_suppresses_mismatch() {
        let mut tx = baseline();
        tx.shipping_address = Some(Address::new("US", "94105"));
        assert_eq!(run(&tx), vec![SignalKind::AddressCountryMismatch]);

        tx.billing_address = None;
        assert!(run(&tx).is_empty());

        tx.shipping_address = None;
        tx.billing_address = Some(Address::new("MX", "01000"));
        assert!(run(&tx).is_empty());
    }

    #[test]
    fn test_large_cart_boundary() {
        let mut tx = baseline();
        tx.cart_items = 12;
        assert!(run(&tx).is_empty());

        tx.cart_items = 13;
        assert_eq!(run(&tx), vec![SignalKind::LargeCart]);
    }

    #[test]
    fn test_email_signals_co_trigger() {
        let mut tx = baseline();
        tx.email = "test+spam@tempmail.com".to_string();
        assert_eq!(
            run(&tx),
            vec![SignalKind::EmailAlias, SignalKind::DisposableEmail]
        );

        tx.email = String::new();
        assert!(run(&tx).is_empty());

        tx.email = "x+y@z@tempmail.com".to_string();
        assert!(run(&tx).is_empty());
    }

    #[test]
    fn test_weights_come_from_table() {
        let factors = RiskFactors::default();
        let domains = DisposableDomains::default();
        let ctx = SignalContext {
            factors: &factors,
            disposable_domains: &domains,
        };
        let weights = SignalWeights {
            large_cart: 42,
            ..SignalWeights::default()
        };

        let mut tx = baseline();
        tx.cart_items = 50;
        let signals = evaluate(&tx, &ctx, &weights);
        assert_eq!(
            signals,
            vec![RiskSignal {
                kind: SignalKind::LargeCart,
                weight: 42
            }]
        );
    }
}
