//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (Ollama over HTTP, plus an offline mock)
//! - Entry points (CLI command routing and the HTTP API)

pub mod adapter;
pub mod api;

pub use adapter::*;
