//! # lex_chat - Chat session core for LexBuddy
//!
//! This crate implements the client-side chat core:
//! - **Session Store**: the conversation log persisted to a single JSON slot,
//!   with soft recovery from corrupt state
//! - **Chat Controller**: one request/response cycle per submitted message,
//!   keeping the view and the store consistent
//! - **Responders**: the remote HTTP endpoint, or a built-in keyword
//!   responder when no endpoint is configured
//!
//! ## Architecture
//!
//! ```text
//! user input ──▶ ChatController ──▶ Responder (HTTP or keyword)
//!                    │   ▲                │
//!                    ▼   └── reply/failure┘
//!               SessionStore (full-log overwrite per mutation)
//!                    │
//!                    ▼
//!                ChatView (typing placeholder, rendered messages)
//! ```
//!
//! Failure handling is deliberately flat: a malformed history slot resets to
//! an empty log plus a welcome message, and any responder failure becomes a
//! fixed fallback reply. Nothing in this core is fatal.

pub mod config;
pub mod controller;
pub mod error;
pub mod keyword;
pub mod responder;
pub mod store;
pub mod types;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use keyword::*;
pub use responder::*;
pub use store::*;
pub use types::*;
