use super::super::domain::{OnChainMetrics, PeerScores, TextSignal};
use super::config::ScoringPolicy;

pub(crate) struct SubScores {
    pub text: f64,
    pub chain: f64,
    pub dao: f64,
}

impl SubScores {
    pub fn total(&self) -> f64 {
        self.text + self.chain + self.dao
    }
}

pub(crate) fn score_components(
    signal: TextSignal,
    on_chain: &OnChainMetrics,
    peer_scores: &PeerScores,
    policy: &ScoringPolicy,
) -> SubScores {
    SubScores {
        text: text_score(signal, policy),
        chain: chain_score(on_chain, policy),
        dao: dao_score(peer_scores, policy),
    }
}

/// The squashed signal already bounds this term, so no clamp is applied.
pub(crate) fn text_score(signal: TextSignal, policy: &ScoringPolicy) -> f64 {
    signal.value() * policy.text_weight
}

// Upper cap only: negative inputs yield negative scores.
pub(crate) fn chain_score(on_chain: &OnChainMetrics, policy: &ScoringPolicy) -> f64 {
    let raw = on_chain.previous_loans_repaid * policy.loans_repaid_weight
        + on_chain.collateral_ratio * policy.collateral_ratio_weight
        + on_chain.wallet_age_years * policy.wallet_age_weight;
    raw.min(policy.chain_score_cap)
}

pub(crate) fn dao_score(peer_scores: &PeerScores, policy: &ScoringPolicy) -> f64 {
    peer_scores.mean().min(policy.dao_score_cap)
}
