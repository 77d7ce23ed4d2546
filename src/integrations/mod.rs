//! Hosted third-party services: payment intents, geocoding, outbound email.
//!
//! Each service sits behind a trait so the checkout and delivery flows can be
//! tested against in-process fakes. The live implementations are thin reqwest
//! calls; there is deliberately no retry, webhook, or reconciliation layer.

pub mod geocode;
pub mod mailer;
pub mod payment;

pub use geocode::*;
pub use mailer::*;
pub use payment::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("No result for: {0}")]
    NoResult(String),
}
