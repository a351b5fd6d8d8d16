//! # lex_auth - Identity provider boundary for LexBuddy
//!
//! The chat core treats authentication as an external collaborator: this
//! crate validates credential forms the way the original web forms did and
//! submits them to the identity provider, yielding success/failure and, on
//! login, an opaque token.

pub mod client;
pub mod error;
pub mod validate;

pub use client::*;
pub use error::*;
pub use validate::*;
