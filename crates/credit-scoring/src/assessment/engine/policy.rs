use super::super::domain::RiskLevel;
use super::config::ScoringPolicy;

/// Strict thresholds: a score sitting exactly on a boundary falls to the riskier tier.
pub(crate) fn classify_risk(final_score: f64, policy: &ScoringPolicy) -> RiskLevel {
    if final_score > policy.low_risk_above {
        RiskLevel::Low
    } else if final_score > policy.medium_risk_above {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub(crate) fn max_loan_amount(final_score: f64, policy: &ScoringPolicy) -> f64 {
    policy.base_loan_amount * (final_score / policy.reference_score)
}

pub(crate) fn recommended_interest_rate(final_score: f64, policy: &ScoringPolicy) -> f64 {
    let discount = (final_score / 100.0) * policy.max_interest_discount;
    (policy.base_interest_rate - discount).max(policy.interest_rate_floor)
}
