// Calculator session state
pub mod calculator;

// Referral capture and submission
pub mod referral_service;

// Report generation
pub mod report_service;
