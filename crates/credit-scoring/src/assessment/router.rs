use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::domain::{CreditAssessmentRequest, ScoreBreakdown, ValidationError};
use super::embedding::TextEmbedder;
use super::engine::{CreditScoringEngine, ScoringError};
use super::interview::STANDARD_INTERVIEW_QUESTIONS;
use super::report::{IdentityVerification, ReportGenerator};
use crate::error::AppError;

/// Assessment request plus the identity check that accompanies a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditReportRequest {
    #[serde(flatten)]
    pub assessment: CreditAssessmentRequest,
    pub identity_verification: IdentityVerification,
}

/// Error raised while serving an assessment.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Router builder exposing the scoring, report, and questionnaire endpoints.
pub fn assessment_router<E>(engine: Arc<CreditScoringEngine<E>>) -> Router
where
    E: TextEmbedder + 'static,
{
    Router::new()
        .route("/api/v1/credit/assessments", post(assess_handler::<E>))
        .route("/api/v1/credit/reports", post(report_handler::<E>))
        .route(
            "/api/v1/credit/interview-questions",
            get(interview_questions_handler),
        )
        .route("/assess-credit", post(legacy_assess_handler::<E>))
        .route("/interview-questions", get(interview_questions_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler<E>(
    State(engine): State<Arc<CreditScoringEngine<E>>>,
    axum::Json(request): axum::Json<CreditAssessmentRequest>,
) -> Response
where
    E: TextEmbedder + 'static,
{
    match score_request(engine, request).await {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => failure_response(error),
    }
}

/// Unversioned endpoint kept for existing clients; any wallet string is accepted.
pub(crate) async fn legacy_assess_handler<E>(
    State(engine): State<Arc<CreditScoringEngine<E>>>,
    axum::Json(request): axum::Json<CreditAssessmentRequest>,
) -> Response
where
    E: TextEmbedder + 'static,
{
    match run_engine(engine, request).await {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn report_handler<E>(
    State(engine): State<Arc<CreditScoringEngine<E>>>,
    axum::Json(request): axum::Json<CreditReportRequest>,
) -> Response
where
    E: TextEmbedder + 'static,
{
    let CreditReportRequest {
        assessment,
        identity_verification,
    } = request;

    match score_request(engine, assessment).await {
        Ok(breakdown) => {
            let report = ReportGenerator.generate(&breakdown, &identity_verification);
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn interview_questions_handler() -> Response {
    let payload = json!({ "questions": STANDARD_INTERVIEW_QUESTIONS });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Validates the wallet, then scores the request.
pub async fn score_request<E>(
    engine: Arc<CreditScoringEngine<E>>,
    request: CreditAssessmentRequest,
) -> Result<ScoreBreakdown, AssessmentError>
where
    E: TextEmbedder + 'static,
{
    request.wallet_address.validate()?;
    run_engine(engine, request).await
}

/// Runs the engine on the blocking pool, since embedding may be slow.
async fn run_engine<E>(
    engine: Arc<CreditScoringEngine<E>>,
    request: CreditAssessmentRequest,
) -> Result<ScoreBreakdown, AssessmentError>
where
    E: TextEmbedder + 'static,
{
    let CreditAssessmentRequest {
        wallet_address,
        responses,
        on_chain_data,
        peer_scores,
    } = request;

    let breakdown = tokio::task::spawn_blocking(move || {
        engine.calculate_credit_score(&responses, &on_chain_data, &peer_scores)
    })
    .await
    .map_err(|err| ScoringError::Computation(format!("scoring task failed: {err}")))??;

    info!(
        wallet = %wallet_address.0,
        risk_level = %breakdown.risk_level,
        final_score = breakdown.final_score,
        "credit assessment completed"
    );

    Ok(breakdown)
}

fn failure_response(error: AssessmentError) -> Response {
    warn!(error = %error, "credit assessment rejected");
    AppError::from(error).into_response()
}
