//! Immutable policy snapshot
//!
//! A [`FraudPolicy`] is compiled once from a validated [`FraudConfig`] and
//! never mutated afterwards. Evaluating a transaction against it is a pure
//! function of the transaction and the snapshot.

use crate::config::{FraudConfig, RiskFactors, SignalWeights};
use crate::denylist::IpDenylist;
use crate::email::DisposableDomains;
use crate::recommendations::{self, BLOCK_RECOMMENDATION, DENYLIST_RECOMMENDATION};
use crate::scoring::RiskScorer;
use crate::signals::{self, SignalContext};
use crate::types::{Decision, FraudCheckResult, RiskScore, TransactionData};
use crate::Result;
use tracing::{info, warn};

/// Compiled, read-only fraud policy
#[derive(Debug, Clone)]
pub struct FraudPolicy {
    factors: RiskFactors,
    weights: SignalWeights,
    scorer: RiskScorer,
    denylist: IpDenylist,
    disposable_domains: DisposableDomains,
}

impl FraudPolicy {
    /// Validate the config and compile it
    pub fn from_config(config: FraudConfig) -> Result<Self> {
        config.validate()?;

        let policy = Self {
            factors: config.risk_factors,
            weights: config.weights,
            scorer: RiskScorer::new(config.decision),
            denylist: IpDenylist::new(&config.denylist.blocked_ips),
            disposable_domains: DisposableDomains::new(&config.email.disposable_domains),
        };

        info!(
            denylist_entries = policy.denylist.len(),
            disposable_domains = policy.disposable_domains.len(),
            "Fraud policy compiled"
        );

        Ok(policy)
    }

    /// Check an IP against the denylist
    pub fn is_blocked_ip(&self, ip: &str) -> bool {
        self.denylist.is_blocked(ip)
    }

    /// Check an email against the disposable domain set
    pub fn is_disposable_email(&self, email: &str) -> bool {
        self.disposable_domains.is_disposable(email)
    }

    /// Classify a transaction.
    ///
    /// The denylist gate runs first and is final: a hit yields score 100 and
    /// `block` without evaluating any signal.
    pub fn evaluate(&self, tx: &TransactionData) -> FraudCheckResult {
        if self.is_blocked_ip(&tx.ip) {
            warn!(user_id = %tx.user_id, "Client IP is denylisted; blocking");
            return FraudCheckResult {
                score: RiskScore::MAX,
                decision: Decision::Block,
                signals: Vec::new(),
                recommendations: vec![
                    DENYLIST_RECOMMENDATION.to_string(),
                    BLOCK_RECOMMENDATION.to_string(),
                ],
                denylisted: true,
            };
        }

        let ctx = SignalContext {
            factors: &self.factors,
            disposable_domains: &self.disposable_domains,
        };

        let signals = signals::evaluate(tx, &ctx, &self.weights);
        let score = self.scorer.aggregate(&signals);
        let decision = self.scorer.decide(score);
        let recommendations = recommendations::generate(&signals, decision);

        if decision == Decision::Block {
            warn!(user_id = %tx.user_id, score = score.score(), "Transaction blocked");
        }

        FraudCheckResult {
            score,
            decision,
            signals,
            recommendations,
            denylisted: false,
        }
    }
}

/// Classify a transaction against a policy snapshot
pub fn check_fraud(tx: &TransactionData, policy: &FraudPolicy) -> FraudCheckResult {
    policy.evaluate(tx)
}
