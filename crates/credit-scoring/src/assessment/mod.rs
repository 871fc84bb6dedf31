//! Credit assessment: domain types, text embedding seam, scoring engine,
//! recommendations, reports, and the HTTP surface that serves them.

pub mod advisor;
pub mod domain;
pub mod embedding;
pub(crate) mod engine;
pub mod interview;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use advisor::recommendations;
pub use domain::{
    CreditAssessmentRequest, InterviewAnswer, InterviewResponses, OnChainMetrics, PeerScores,
    RiskLevel, ScoreBreakdown, TextSignal, ValidationError, WalletAddress,
};
pub use embedding::{EmbeddingError, FixedSignalEmbedder, HashedTokenEmbedder, TextEmbedder};
pub use engine::{CreditScoringEngine, ScoringError, ScoringPolicy};
pub use interview::STANDARD_INTERVIEW_QUESTIONS;
pub use report::{
    AssessmentSummary, ComponentSummary, CreditReport, FaceVerificationSummary,
    IdentityVerification, ReportGenerator,
};
pub use router::{assessment_router, score_request, AssessmentError, CreditReportRequest};
