//! Authentication API module for HTTP communication

mod client;
mod traits;

pub use client::AuthClient;
pub use traits::{AuthGateway, LoginRequest, SignupRequest, SubmitOutcome};

#[cfg(test)]
pub use traits::MockAuthGateway;
