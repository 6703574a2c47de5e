// Projection domain
pub mod metrics;
pub mod projection;
pub mod scenario;

// Lead capture and referral domain
pub mod contact;
pub mod referral;

// Port interfaces
pub mod ports;

// Cross-cutting helpers
pub mod formatting;
pub mod validation;

// Domain-specific error types
pub mod errors;
