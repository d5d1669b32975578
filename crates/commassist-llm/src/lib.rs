//! Text-generation collaborator
//!
//! The bot delegates all language work to an OpenAI-compatible chat
//! completions endpoint. [`Collaborator`] is the seam the bot depends on;
//! [`OpenAiClient`] is the production implementation.

pub mod client;
pub mod collaborator;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod mocks;
pub mod prompts;

pub use client::OpenAiClient;
pub use collaborator::Collaborator;
pub use config::{LlmConfig, ReadEnv, SystemEnv};
pub use error::{Error, Result};
