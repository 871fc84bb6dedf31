use serde::{Deserialize, Serialize};

/// Weights, caps, and loan-term constants applied by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub text_weight: f64,
    pub loans_repaid_weight: f64,
    pub collateral_ratio_weight: f64,
    pub wallet_age_weight: f64,
    pub chain_score_cap: f64,
    pub dao_score_cap: f64,
    pub low_risk_above: f64,
    pub medium_risk_above: f64,
    pub base_loan_amount: f64,
    pub reference_score: f64,
    pub base_interest_rate: f64,
    pub max_interest_discount: f64,
    pub interest_rate_floor: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            text_weight: 40.0,
            loans_repaid_weight: 5.0,
            collateral_ratio_weight: 10.0,
            wallet_age_weight: 2.0,
            chain_score_cap: 30.0,
            dao_score_cap: 30.0,
            low_risk_above: 80.0,
            medium_risk_above: 60.0,
            base_loan_amount: 1000.0,
            reference_score: 50.0,
            base_interest_rate: 0.15,
            max_interest_discount: 0.10,
            interest_rate_floor: 0.05,
        }
    }
}
