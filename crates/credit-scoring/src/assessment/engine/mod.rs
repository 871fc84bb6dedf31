mod config;
mod policy;
mod rules;

pub use config::ScoringPolicy;

use super::domain::{InterviewResponses, OnChainMetrics, PeerScores, ScoreBreakdown, TextSignal};
use super::embedding::{EmbeddingError, TextEmbedder};
use tracing::debug;

/// Stateless scorer holding a shared, read-only handle to the embedder.
pub struct CreditScoringEngine<E> {
    embedder: E,
    policy: ScoringPolicy,
}

impl<E> CreditScoringEngine<E>
where
    E: TextEmbedder,
{
    pub fn new(embedder: E, policy: ScoringPolicy) -> Self {
        Self { embedder, policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Encode the interview text once, then score the three signals.
    pub fn calculate_credit_score(
        &self,
        responses: &InterviewResponses,
        on_chain: &OnChainMetrics,
        peer_scores: &PeerScores,
    ) -> Result<ScoreBreakdown, ScoringError> {
        let text = responses.combined_text();
        let signal = self.embedder.encode(&text)?;
        self.score_signal(signal, on_chain, peer_scores)
    }

    /// Numeric stage only, for callers that already hold a text signal.
    pub fn score_signal(
        &self,
        signal: TextSignal,
        on_chain: &OnChainMetrics,
        peer_scores: &PeerScores,
    ) -> Result<ScoreBreakdown, ScoringError> {
        if !signal.value().is_finite() {
            return Err(ScoringError::Computation(format!(
                "text signal {} is not finite",
                signal.value()
            )));
        }

        let components = rules::score_components(signal, on_chain, peer_scores, &self.policy);
        let final_score = components.total();
        if !final_score.is_finite() {
            return Err(ScoringError::Computation(
                "final score is not finite".to_string(),
            ));
        }

        debug!(
            text_score = components.text,
            chain_score = components.chain,
            dao_score = components.dao,
            final_score,
            "credit score components"
        );

        Ok(ScoreBreakdown {
            final_score,
            text_score: components.text,
            chain_score: components.chain,
            dao_score: components.dao,
            risk_level: policy::classify_risk(final_score, &self.policy),
            max_loan_amount: policy::max_loan_amount(final_score, &self.policy),
            recommended_interest_rate: policy::recommended_interest_rate(
                final_score,
                &self.policy,
            ),
        })
    }
}

/// Failure raised while scoring an applicant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] EmbeddingError),
    #[error("computation error: {0}")]
    Computation(String),
}
