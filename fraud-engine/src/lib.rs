//! Fraud Engine
//!
//! Checkout-time fraud classification. Each transaction is classified as
//! `allow`, `review` or `block` before payment capture.
//!
//! # Pipeline
//!
//! - **Denylist gate**: an exact IP match blocks outright with score 100
//! - **Signals**: independent weighted predicates over the transaction
//! - **Scoring**: weights are summed, clamped to 0..=100 and mapped to a tier
//! - **Recommendations**: operator guidance for the signals and tier
//!
//! # Invariants
//!
//! - Deterministic: same transaction + same policy snapshot → same result
//! - Score always within 0..=100
//! - A denylist hit is always `block`

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod checkout;
pub mod config;
pub mod denylist;
pub mod email;
pub mod engine;
pub mod error;
pub mod policy;
pub mod recommendations;
pub mod scoring;
pub mod signals;
pub mod types;

pub use checkout::{CheckoutAction, CheckoutOutcome, FraudAssessment};
pub use crate::config::{FraudConfig, RiskFactors, SignalWeights};
pub use denylist::IpDenylist;
pub use email::DisposableDomains;
pub use engine::FraudEngine;
pub use error::{Error, Result};
pub use policy::{check_fraud, FraudPolicy};
pub use scoring::RiskScorer;
pub use types::*;
