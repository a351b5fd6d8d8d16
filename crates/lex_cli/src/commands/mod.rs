//! CLI command definitions.
//!
//! Each subcommand maps to one user-facing flow of the legal assistant:
//! chatting, signing in, and inspecting the persisted conversation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod chat;
pub mod history;
pub mod login;
pub mod signup;

/// File under the data directory holding the credential token
pub(crate) const TOKEN_FILE: &str = "token";

/// LexBuddy - legal assistant chat client
#[derive(Parser)]
#[command(name = "lexbuddy")]
#[command(version, about = "LexBuddy - legal assistant chat client")]
#[command(long_about = r#"
LexBuddy is a chat client for legal-assistant conversations. The
conversation is persisted locally and restored on the next start; replies
come from a configured responder endpoint, or from a built-in cyber-law
responder when none is configured.

COMMANDS:
  chat     → Interactive conversation (/domain to switch, exit to quit)
  login    → Submit credentials to the identity provider
  signup   → Create an account with the identity provider
  history  → Print the persisted conversation
  clear    → Remove the persisted conversation

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Authentication failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding persisted chat state and settings
    #[arg(long, global = true, default_value = ".lexbuddy")]
    pub data_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat(chat::ChatArgs),

    /// Log in to the identity provider
    Login(login::LoginArgs),

    /// Create a new account
    Signup(signup::SignupArgs),

    /// Print the persisted conversation
    History(history::HistoryArgs),

    /// Remove the persisted conversation
    Clear,
}
