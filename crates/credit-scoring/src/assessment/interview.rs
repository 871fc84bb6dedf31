/// Questions presented to every applicant before an assessment.
pub const STANDARD_INTERVIEW_QUESTIONS: [&str; 5] = [
    "What is the primary purpose of this loan?",
    "How do you plan to repay this loan?",
    "What is your current source of income?",
    "Have you taken any loans before? How did you manage them?",
    "What collateral can you provide for this loan?",
];
