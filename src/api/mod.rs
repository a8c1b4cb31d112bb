// ABOUTME: Backend API surface: wire types, client, and error taxonomy

pub mod client;
pub mod error;
pub mod types;

pub use client::{QuoteApiClient, DEFAULT_ENDPOINT};
pub use error::ApiError;
pub use types::{LeadSubmission, OrgConfig, PricingTable, Service, SubmitResponse};
