pub mod referral_client;

pub use referral_client::HttpReferralClient;
