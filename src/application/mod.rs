//! # Application Layer
//!
//! Use cases coordinating prompt construction, the chat client and reply extraction.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
