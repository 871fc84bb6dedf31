use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    CreditAssessmentRequest, InterviewResponses, OnChainMetrics, PeerScores, RiskLevel,
    ScoreBreakdown, WalletAddress,
};
use crate::assessment::embedding::{EmbeddingError, FixedSignalEmbedder, TextEmbedder};
use crate::assessment::engine::{CreditScoringEngine, ScoringPolicy};
use crate::assessment::TextSignal;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn fixed_engine(signal: f64) -> CreditScoringEngine<FixedSignalEmbedder> {
    CreditScoringEngine::new(FixedSignalEmbedder(signal), ScoringPolicy::default())
}

pub(super) fn reference_metrics() -> OnChainMetrics {
    OnChainMetrics {
        previous_loans_repaid: 2.0,
        collateral_ratio: 1.5,
        wallet_age_years: 3.0,
    }
}

pub(super) fn reference_peers() -> PeerScores {
    PeerScores(vec![20.0, 25.0])
}

pub(super) fn reference_request() -> CreditAssessmentRequest {
    CreditAssessmentRequest {
        wallet_address: WalletAddress("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string()),
        responses: InterviewResponses::new(),
        on_chain_data: reference_metrics(),
        peer_scores: reference_peers(),
    }
}

pub(super) fn breakdown_with(text: f64, chain: f64, dao: f64) -> ScoreBreakdown {
    ScoreBreakdown {
        final_score: text + chain + dao,
        text_score: text,
        chain_score: chain,
        dao_score: dao,
        risk_level: RiskLevel::High,
        max_loan_amount: 0.0,
        recommended_interest_rate: 0.15,
    }
}

/// Embedder that always fails, for propagation checks.
pub(super) struct OversizedInputEmbedder;

impl TextEmbedder for OversizedInputEmbedder {
    fn encode(&self, text: &str) -> Result<TextSignal, EmbeddingError> {
        Err(EmbeddingError::InputTooLarge {
            len: text.len(),
            limit: 0,
        })
    }
}

/// Embedder whose backend is offline.
pub(super) struct OfflineEmbedder;

impl TextEmbedder for OfflineEmbedder {
    fn encode(&self, _text: &str) -> Result<TextSignal, EmbeddingError> {
        Err(EmbeddingError::Unavailable("model server offline".to_string()))
    }
}

pub(super) fn failing_engine() -> Arc<CreditScoringEngine<OversizedInputEmbedder>> {
    Arc::new(CreditScoringEngine::new(
        OversizedInputEmbedder,
        ScoringPolicy::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
