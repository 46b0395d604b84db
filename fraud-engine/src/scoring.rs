//! Score aggregation and decision mapping

use crate::config::DecisionThresholds;
use crate::types::{Decision, RiskScore, RiskSignal};

/// Risk scorer: sums signal weights and maps the clamped score to a tier
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    thresholds: DecisionThresholds,
}

impl RiskScorer {
    /// Create new risk scorer
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { thresholds }
    }

    /// Sum triggered weights and clamp to 0..=100
    pub fn aggregate(&self, signals: &[RiskSignal]) -> RiskScore {
        let total = signals
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.weight as u32));
        RiskScore::new(total)
    }

    /// Map a score to its tier; lower bounds are inclusive
    pub fn decide(&self, score: RiskScore) -> Decision {
        match score.score() {
            s if s >= self.thresholds.block_at => Decision::Block,
            s if s >= self.thresholds.review_at => Decision::Review,
            _ => Decision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalKind;

    fn signal(kind: SignalKind, weight: u8) -> RiskSignal {
        RiskSignal { kind, weight }
    }

    #[test]
    fn test_empty_signals_score_zero() {
        let scorer = RiskScorer::default();
        let score = scorer.aggregate(&[]);

        assert_eq!(score.score(), 0);
        assert_eq!(scorer.decide(score), Decision::Allow);
    }

    #[test]
    fn test_aggregate_clamps_at_100() {
        let scorer = RiskScorer::default();
        let signals = [
            signal(SignalKind::HighValue, 30),
            signal(SignalKind::NewCustomerHighValue, 20),
            signal(SignalKind::AddressCountryMismatch, 25),
            signal(SignalKind::LargeCart, 15),
            signal(SignalKind::EmailAlias, 10),
            signal(SignalKind::DisposableEmail, 15),
        ];

        assert_eq!(scorer.aggregate(&signals), RiskScore::MAX);
    }

    #[test]
    fn test_decision_boundaries() {
        let scorer = RiskScorer::default();

        assert_eq!(scorer.decide(RiskScore::new(0)), Decision::Allow);
        assert_eq!(scorer.decide(RiskScore::new(29)), Decision::Allow);
        assert_eq!(scorer.decide(RiskScore::new(30)), Decision::Review);
        assert_eq!(scorer.decide(RiskScore::new(59)), Decision::Review);
        assert_eq!(scorer.decide(RiskScore::new(60)), Decision::Block);
        assert_eq!(scorer.decide(RiskScore::new(100)), Decision::Block);
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = RiskScorer::new(DecisionThresholds {
            review_at: 10,
            block_at: 20,
        });

        assert_eq!(scorer.decide(RiskScore::new(9)), Decision::Allow);
        assert_eq!(scorer.decide(RiskScore::new(10)), Decision::Review);
        assert_eq!(scorer.decide(RiskScore::new(20)), Decision::Block);
    }
}
