//! Completion model backends
//!
//! Trait-based abstraction over the hosted text-generation service that
//! turns an assembled prompt into free-form text. One backend ships
//! (OpenAI-compatible chat completions); the trait seam exists so tests can
//! substitute a mock and verify the remote call is skipped on
//! precondition failures.

use async_trait::async_trait;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiBackend;

/// Errors from the completion call itself
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response parsed but contained no completion text
    #[error("completion response contained no choices")]
    Empty,
}

/// A hosted text-generation endpoint
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend name, for logging
    fn name(&self) -> &str;

    /// Whether a credential is configured; checked before any remote call
    fn is_available(&self) -> bool;

    /// The environment variable holding the credential, for error text
    fn credential_env(&self) -> &str;

    /// Send a prompt and return the completion text, trimmed of
    /// surrounding whitespace.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
