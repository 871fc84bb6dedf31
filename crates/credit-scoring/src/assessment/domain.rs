use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wallet identifier supplied with an assessment request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0.trim().is_empty() {
            return Err(ValidationError::InvalidWalletAddress);
        }
        Ok(())
    }
}

/// Request-level validation failure raised before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("wallet_address must not be empty")]
    InvalidWalletAddress,
}

/// One answered interview question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewAnswer {
    pub question: String,
    pub answer: String,
}

/// Interview answers keyed by question, kept in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewResponses {
    answers: Vec<InterviewAnswer>,
}

impl InterviewResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer. A repeated question keeps its original position and
    /// takes the newer answer.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question == question)
        {
            Some(existing) => existing.answer = answer,
            None => self.answers.push(InterviewAnswer { question, answer }),
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterviewAnswer> {
        self.answers.iter()
    }

    /// Single text blob handed to the embedding step.
    pub fn combined_text(&self) -> String {
        self.answers
            .iter()
            .map(|entry| entry.answer.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<Q, A> FromIterator<(Q, A)> for InterviewResponses
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (Q, A)>>(iter: T) -> Self {
        let mut responses = Self::new();
        for (question, answer) in iter {
            responses.insert(question, answer);
        }
        responses
    }
}

impl Serialize for InterviewResponses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.answers.len()))?;
        for entry in &self.answers {
            map.serialize_entry(&entry.question, &entry.answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InterviewResponses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponsesVisitor;

        impl<'de> Visitor<'de> for ResponsesVisitor {
            type Value = InterviewResponses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of interview question to answer text")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut responses = InterviewResponses::new();
                while let Some((question, answer)) = access.next_entry::<String, String>()? {
                    responses.insert(question, answer);
                }
                Ok(responses)
            }
        }

        deserializer.deserialize_map(ResponsesVisitor)
    }
}

/// Quantitative facts pulled from the applicant's wallet history.
///
/// Unrecognized keys in the incoming JSON object are ignored and missing keys
/// default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnChainMetrics {
    pub previous_loans_repaid: f64,
    pub collateral_ratio: f64,
    pub wallet_age_years: f64,
}

/// Reputation scores assigned by DAO members, one entry per member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerScores(pub Vec<f64>);

impl PeerScores {
    /// Arithmetic mean, or zero when no member has scored the applicant.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for PeerScores {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

/// Scalar summary of the interview text produced by a [`TextEmbedder`].
///
/// [`TextEmbedder`]: super::embedding::TextEmbedder
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TextSignal(pub f64);

impl TextSignal {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Coarse bucketing of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine output: the three sub-scores, their sum, and the derived loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub final_score: f64,
    pub text_score: f64,
    pub chain_score: f64,
    pub dao_score: f64,
    pub risk_level: RiskLevel,
    pub max_loan_amount: f64,
    pub recommended_interest_rate: f64,
}

/// Payload accepted by the assessment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAssessmentRequest {
    pub wallet_address: WalletAddress,
    #[serde(default)]
    pub responses: InterviewResponses,
    #[serde(default)]
    pub on_chain_data: OnChainMetrics,
    #[serde(default, alias = "dao_scores")]
    pub peer_scores: PeerScores,
}
