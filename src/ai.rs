//! Gemini completion client
//!
//! Wraps the Generative Language REST API behind an async provider and runs
//! requests on a background worker thread so the terminal never blocks.

pub mod provider;
pub mod request;
pub mod worker;

pub use provider::{AiError, AsyncAiProvider, ErrorKind, make_client};
pub use request::{AiRequest, AiResponse};
