//! Safety advisor chat for the extinguisher trainer.
//!
//! Wraps the Gemini `generateContent` API behind a blocking client whose
//! [`AdvisorClient::advise`] entry point never fails: any transport or
//! payload problem degrades to fixed offline guidance strings, so the
//! trainer itself keeps running without network access or an API key.

pub mod client;
pub mod error;

pub use client::{build_request_body, AdvisorClient};
pub use error::{AdvisorError, Result};
