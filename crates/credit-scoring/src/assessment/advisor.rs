use super::domain::ScoreBreakdown;

const TEXT_SCORE_GUIDANCE_BELOW: f64 = 20.0;
const CHAIN_SCORE_GUIDANCE_BELOW: f64 = 15.0;
const DAO_SCORE_GUIDANCE_BELOW: f64 = 15.0;

/// Improvement suggestions for weak components, always ordered text, chain, dao.
pub fn recommendations(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut suggestions = Vec::new();
    if breakdown.text_score < TEXT_SCORE_GUIDANCE_BELOW {
        suggestions.push("improve text responses".to_string());
    }
    if breakdown.chain_score < CHAIN_SCORE_GUIDANCE_BELOW {
        suggestions.push("build on-chain history".to_string());
    }
    if breakdown.dao_score < DAO_SCORE_GUIDANCE_BELOW {
        suggestions.push("increase peer participation".to_string());
    }
    suggestions
}
