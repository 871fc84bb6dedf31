use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::advisor::recommendations;
use super::domain::{RiskLevel, ScoreBreakdown};

/// Result of the external liveness check, consumed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityVerification {
    pub is_human: bool,
    #[serde(default)]
    pub details: Map<String, Value>,
}

/// Display document combining a score breakdown with identity verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditReport {
    pub report_id: String,
    pub timestamp: String,
    pub credit_assessment: AssessmentSummary,
    pub score_breakdown: ComponentSummary,
    pub face_verification: FaceVerificationSummary,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub score: f64,
    pub risk_level: RiskLevel,
    pub max_loan_amount: f64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub text_analysis: f64,
    pub blockchain_analysis: f64,
    pub dao_participation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceVerificationSummary {
    pub verified: bool,
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(
        &self,
        breakdown: &ScoreBreakdown,
        verification: &IdentityVerification,
    ) -> CreditReport {
        self.generate_at(breakdown, verification, Local::now().fixed_offset())
    }

    /// Builds the report as of `now`; the report id is `now` as `%Y%m%d%H%M%S`.
    pub fn generate_at(
        &self,
        breakdown: &ScoreBreakdown,
        verification: &IdentityVerification,
        now: DateTime<FixedOffset>,
    ) -> CreditReport {
        CreditReport {
            report_id: now.format("%Y%m%d%H%M%S").to_string(),
            timestamp: now.to_rfc3339(),
            credit_assessment: AssessmentSummary {
                score: breakdown.final_score,
                risk_level: breakdown.risk_level,
                max_loan_amount: breakdown.max_loan_amount,
                interest_rate: breakdown.recommended_interest_rate,
            },
            score_breakdown: ComponentSummary {
                text_analysis: breakdown.text_score,
                blockchain_analysis: breakdown.chain_score,
                dao_participation: breakdown.dao_score,
            },
            face_verification: FaceVerificationSummary {
                verified: verification.is_human,
                details: verification.details.clone(),
            },
            recommendations: recommendations(breakdown),
        }
    }
}
