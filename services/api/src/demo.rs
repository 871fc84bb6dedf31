use crate::infra::{build_engine, default_scoring_policy};
use clap::Args;
use credit_scoring::assessment::{
    recommendations, score_request, CreditAssessmentRequest, CreditScoringEngine,
    FixedSignalEmbedder, IdentityVerification, InterviewResponses, OnChainMetrics, PeerScores,
    ReportGenerator, ScoreBreakdown, STANDARD_INTERVIEW_QUESTIONS,
};
use credit_scoring::config::AppConfig;
use credit_scoring::error::AppError;
use serde_json::Map;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Path to a JSON assessment request. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) request: Option<PathBuf>,
    /// Emit a full credit report instead of the bare score breakdown.
    #[arg(long)]
    pub(crate) report: bool,
    /// Mark the applicant as passing identity verification in the report.
    #[arg(long)]
    pub(crate) verified: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Text signal injected in place of the embedder (0-1).
    #[arg(long, default_value_t = 0.5)]
    pub(crate) signal: f64,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        request,
        report,
        verified,
    } = args;

    let config = AppConfig::load()?;
    let raw = match request {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let request: CreditAssessmentRequest = serde_json::from_str(&raw)?;

    let engine = build_engine(&config.embedding);
    let breakdown = score_request(engine, request).await?;

    let output = if report {
        let verification = IdentityVerification {
            is_human: verified,
            details: Map::new(),
        };
        serde_json::to_string_pretty(&ReportGenerator.generate(&breakdown, &verification))?
    } else {
        serde_json::to_string_pretty(&breakdown)?
    };
    println!("{output}");
    Ok(())
}

pub(crate) fn run_questions() {
    println!("Standard interview questions");
    for (index, question) in STANDARD_INTERVIEW_QUESTIONS.iter().enumerate() {
        println!("{}. {}", index + 1, question);
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = CreditScoringEngine::new(
        FixedSignalEmbedder(args.signal),
        default_scoring_policy(),
    );

    let responses: InterviewResponses = STANDARD_INTERVIEW_QUESTIONS
        .iter()
        .zip(demo_answers())
        .map(|(question, answer)| (*question, answer))
        .collect();
    let on_chain = OnChainMetrics {
        previous_loans_repaid: 2.0,
        collateral_ratio: 1.5,
        wallet_age_years: 3.0,
    };
    let peers = PeerScores(vec![20.0, 25.0]);

    println!("Credit scoring demo");
    println!(
        "- {} interview answers | {} peer scores | injected text signal {:.3}",
        responses.len(),
        peers.0.len(),
        args.signal
    );

    let breakdown = engine.calculate_credit_score(&responses, &on_chain, &peers)?;
    render_breakdown(&breakdown);

    let report = ReportGenerator.generate(
        &breakdown,
        &IdentityVerification {
            is_human: true,
            details: Map::new(),
        },
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\nReport payload:\n{}", json),
        Err(err) => println!("\nReport payload unavailable: {}", err),
    }

    Ok(())
}

fn demo_answers() -> [&'static str; 5] {
    [
        "Buying a second espresso machine for my cafe",
        "From daily sales, roughly 400 tokens per week",
        "Cafe revenue and weekend catering",
        "Yes, two DAO loans, both repaid on schedule",
        "Staked governance tokens worth 1.5x the loan",
    ]
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!("\nScore breakdown");
    println!("- Text analysis: {:.2} / 40", breakdown.text_score);
    println!("- On-chain history: {:.2} / 30", breakdown.chain_score);
    println!("- DAO reputation: {:.2} / 30", breakdown.dao_score);
    println!(
        "Final score {:.2} -> {} risk",
        breakdown.final_score, breakdown.risk_level
    );
    println!(
        "Max loan {:.2} tokens at {:.2}% APR",
        breakdown.max_loan_amount,
        breakdown.recommended_interest_rate * 100.0
    );

    let suggestions = recommendations(breakdown);
    if suggestions.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations");
        for suggestion in suggestions {
            println!("- {}", suggestion);
        }
    }
}
