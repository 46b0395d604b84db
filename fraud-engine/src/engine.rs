//! Fraud engine with hot-swappable policy
//!
//! Readers take a snapshot per evaluation; `reload` swaps in a new snapshot
//! atomically, so an in-flight evaluation always sees one consistent policy.

use crate::checkout::FraudAssessment;
use crate::config::FraudConfig;
use crate::policy::FraudPolicy;
use crate::types::{FraudCheckResult, TransactionData};
use crate::Result;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

/// Fraud engine
#[derive(Debug)]
pub struct FraudEngine {
    policy: ArcSwap<FraudPolicy>,
}

impl FraudEngine {
    /// Create engine from a config; fails if the config is invalid
    pub fn new(config: FraudConfig) -> Result<Self> {
        let policy = FraudPolicy::from_config(config)?;
        Ok(Self {
            policy: ArcSwap::from_pointee(policy),
        })
    }

    /// Create engine from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(FraudConfig::from_env()?)
    }

    /// Current policy snapshot (lock-free)
    #[inline]
    pub fn policy(&self) -> Arc<FraudPolicy> {
        self.policy.load_full()
    }

    /// Classify a transaction
    pub fn check(&self, tx: &TransactionData) -> FraudCheckResult {
        self.policy.load().evaluate(tx)
    }

    /// Classify a transaction and wrap the result for logging or auditing
    pub fn assess(&self, tx: &TransactionData) -> FraudAssessment {
        FraudAssessment::new(&tx.user_id, self.check(tx))
    }

    /// Check an IP against the current denylist
    pub fn is_blocked_ip(&self, ip: &str) -> bool {
        self.policy.load().is_blocked_ip(ip)
    }

    /// Check an email against the current disposable domain set
    pub fn is_disposable_email(&self, email: &str) -> bool {
        self.policy.load().is_disposable_email(email)
    }

    /// Replace the policy.
    ///
    /// The new config is validated and compiled before the swap; on error the
    /// current policy stays live.
    pub fn reload(&self, config: FraudConfig) -> Result<()> {
        let policy = FraudPolicy::from_config(config)?;
        self.policy.store(Arc::new(policy));

        info!("Fraud policy reloaded");
        Ok(())
    }
}
