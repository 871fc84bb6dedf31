use super::common::*;

use crate::assessment::domain::{
    InterviewResponses, OnChainMetrics, PeerScores, RiskLevel, TextSignal,
};
use crate::assessment::embedding::{EmbeddingError, HashedTokenEmbedder};
use crate::assessment::engine::{CreditScoringEngine, ScoringError, ScoringPolicy};

#[test]
fn reference_scenario_scores_medium_risk() {
    let engine = fixed_engine(0.5);

    let breakdown = engine
        .calculate_credit_score(
            &InterviewResponses::new(),
            &reference_metrics(),
            &reference_peers(),
        )
        .expect("scores");

    assert_eq!(breakdown.text_score, 20.0);
    assert_eq!(breakdown.chain_score, 30.0);
    assert_eq!(breakdown.dao_score, 22.5);
    assert_eq!(breakdown.final_score, 72.5);
    assert_eq!(breakdown.risk_level, RiskLevel::Medium);
    assert_close(breakdown.max_loan_amount, 1450.0);
    assert_close(breakdown.recommended_interest_rate, 0.0775);
}

#[test]
fn hashed_embedder_scores_empty_interview_at_neutral_signal() {
    let engine = CreditScoringEngine::new(HashedTokenEmbedder::default(), ScoringPolicy::default());

    let breakdown = engine
        .calculate_credit_score(
            &InterviewResponses::new(),
            &reference_metrics(),
            &reference_peers(),
        )
        .expect("scores");

    assert_eq!(breakdown.text_score, 20.0);
    assert_eq!(breakdown.final_score, 72.5);
}

#[test]
fn chain_score_is_capped_at_thirty() {
    let engine = fixed_engine(0.5);
    let metrics = OnChainMetrics {
        previous_loans_repaid: 5.0,
        collateral_ratio: 1.0,
        wallet_age_years: 5.0,
    };

    let breakdown = engine
        .score_signal(TextSignal(0.5), &metrics, &PeerScores::default())
        .expect("scores");

    assert_eq!(breakdown.chain_score, 30.0);
}

#[test]
fn chain_score_below_cap_is_weighted_sum() {
    let engine = fixed_engine(0.5);
    let metrics = OnChainMetrics {
        previous_loans_repaid: 1.0,
        collateral_ratio: 0.5,
        wallet_age_years: 2.0,
    };

    let breakdown = engine
        .score_signal(TextSignal(0.5), &metrics, &PeerScores::default())
        .expect("scores");

    assert_eq!(breakdown.chain_score, 14.0);
}

#[test]
fn empty_peer_scores_yield_zero_dao_score() {
    let engine = fixed_engine(0.5);

    let breakdown = engine
        .score_signal(
            TextSignal(0.5),
            &OnChainMetrics::default(),
            &PeerScores::default(),
        )
        .expect("empty peers do not fail");

    assert_eq!(breakdown.dao_score, 0.0);
    assert_eq!(breakdown.chain_score, 0.0);
    assert_eq!(breakdown.final_score, 20.0);
}

#[test]
fn dao_score_is_capped_at_thirty() {
    let engine = fixed_engine(0.5);

    let breakdown = engine
        .score_signal(
            TextSignal(0.5),
            &OnChainMetrics::default(),
            &PeerScores(vec![90.0, 70.0]),
        )
        .expect("scores");

    assert_eq!(breakdown.dao_score, 30.0);
}

#[test]
fn risk_tier_boundaries_are_exclusive() {
    let engine = fixed_engine(0.5);
    let capped_chain = OnChainMetrics {
        previous_loans_repaid: 6.0,
        ..OnChainMetrics::default()
    };
    let capped_dao = PeerScores(vec![30.0]);

    let at_eighty = engine
        .score_signal(TextSignal(0.5), &capped_chain, &capped_dao)
        .expect("scores");
    assert_eq!(at_eighty.final_score, 80.0);
    assert_eq!(at_eighty.risk_level, RiskLevel::Medium);

    let above_eighty = engine
        .score_signal(TextSignal(0.500_002_5), &capped_chain, &capped_dao)
        .expect("scores");
    assert!(above_eighty.final_score > 80.0);
    assert_eq!(above_eighty.risk_level, RiskLevel::Low);

    let at_sixty = engine
        .score_signal(TextSignal(0.0), &capped_chain, &capped_dao)
        .expect("scores");
    assert_eq!(at_sixty.final_score, 60.0);
    assert_eq!(at_sixty.risk_level, RiskLevel::High);

    let above_sixty = engine
        .score_signal(TextSignal(0.000_002_5), &capped_chain, &capped_dao)
        .expect("scores");
    assert!(above_sixty.final_score > 60.0);
    assert_eq!(above_sixty.risk_level, RiskLevel::Medium);
}

#[test]
fn max_loan_amount_scales_linearly_with_score() {
    let engine = fixed_engine(0.5);
    let peers = PeerScores::default();

    let at_fifty = engine
        .score_signal(
            TextSignal(0.5),
            &OnChainMetrics {
                previous_loans_repaid: 6.0,
                ..OnChainMetrics::default()
            },
            &peers,
        )
        .expect("scores");
    let at_twenty_five = engine
        .score_signal(
            TextSignal(0.5),
            &OnChainMetrics {
                previous_loans_repaid: 1.0,
                ..OnChainMetrics::default()
            },
            &peers,
        )
        .expect("scores");

    assert_eq!(at_fifty.final_score, 50.0);
    assert_eq!(at_fifty.max_loan_amount, 1000.0);
    assert_eq!(at_twenty_five.final_score, 25.0);
    assert_eq!(at_twenty_five.max_loan_amount * 2.0, at_fifty.max_loan_amount);
}

#[test]
fn interest_rate_floor_only_applies_to_out_of_range_scores() {
    let engine = fixed_engine(0.5);
    let capped_chain = OnChainMetrics {
        previous_loans_repaid: 6.0,
        ..OnChainMetrics::default()
    };
    let capped_dao = PeerScores(vec![30.0]);

    let in_range = engine
        .score_signal(TextSignal(1.0), &capped_chain, &capped_dao)
        .expect("scores");
    assert_eq!(in_range.final_score, 100.0);
    assert_close(in_range.recommended_interest_rate, 0.05);

    let lower = engine
        .score_signal(TextSignal(0.25), &capped_chain, &capped_dao)
        .expect("scores");
    assert!(lower.recommended_interest_rate > in_range.recommended_interest_rate);

    let out_of_range = engine
        .score_signal(TextSignal(2.0), &capped_chain, &capped_dao)
        .expect("scores");
    assert_eq!(out_of_range.final_score, 140.0);
    assert_eq!(out_of_range.recommended_interest_rate, 0.05);
}

#[test]
fn negative_inputs_are_not_clamped_from_below() {
    let engine = fixed_engine(0.5);
    let metrics = OnChainMetrics {
        previous_loans_repaid: 0.0,
        collateral_ratio: -3.0,
        wallet_age_years: 0.0,
    };

    let breakdown = engine
        .score_signal(TextSignal(0.0), &metrics, &PeerScores(vec![-10.0]))
        .expect("scores");

    assert_eq!(breakdown.chain_score, -30.0);
    assert_eq!(breakdown.dao_score, -10.0);
    assert_eq!(breakdown.final_score, -40.0);
    assert_eq!(breakdown.risk_level, RiskLevel::High);
}

#[test]
fn embedding_failures_propagate_as_invalid_input() {
    let engine = failing_engine();
    let mut responses = InterviewResponses::new();
    responses.insert("purpose", "Working capital");

    let err = engine
        .calculate_credit_score(&responses, &reference_metrics(), &reference_peers())
        .expect_err("embedding failure surfaces");

    assert_eq!(
        err,
        ScoringError::InvalidInput(EmbeddingError::InputTooLarge { len: 15, limit: 0 })
    );
}

#[test]
fn backend_outage_propagates_unchanged() {
    let engine = CreditScoringEngine::new(OfflineEmbedder, ScoringPolicy::default());

    let err = engine
        .calculate_credit_score(
            &InterviewResponses::new(),
            &reference_metrics(),
            &reference_peers(),
        )
        .expect_err("outage surfaces");

    assert_eq!(
        err,
        ScoringError::InvalidInput(EmbeddingError::Unavailable(
            "model server offline".to_string()
        ))
    );
}

#[test]
fn non_finite_signal_is_a_computation_error() {
    let engine = fixed_engine(f64::NAN);

    let err = engine
        .calculate_credit_score(
            &InterviewResponses::new(),
            &reference_metrics(),
            &reference_peers(),
        )
        .expect_err("nan rejected");

    assert!(matches!(err, ScoringError::Computation(_)));
}

#[test]
fn engine_exposes_default_policy_constants() {
    let engine = fixed_engine(0.5);
    let policy = engine.policy();

    assert_eq!(policy.text_weight, 40.0);
    assert_eq!(policy.chain_score_cap, 30.0);
    assert_eq!(policy.dao_score_cap, 30.0);
    assert_eq!(policy.low_risk_above, 80.0);
    assert_eq!(policy.medium_risk_above, 60.0);
    assert_eq!(policy.interest_rate_floor, 0.05);
}
