//! Core types for the chat session core.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// Serialized with the field names the web client used in its persisted
/// history, so an existing history slot is readable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message text
    pub content: String,
    /// Display-formatted timestamp (HH:MM)
    pub time: String,
    /// Whether the message was sent by the user (false = bot)
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl Message {
    /// Create a new user message stamped with the current local time
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            time: display_time(),
            is_user: true,
        }
    }

    /// Create a new bot message stamped with the current local time
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            time: display_time(),
            is_user: false,
        }
    }
}

// HH:MM, matching the web client's toLocaleTimeString rendering
fn display_time() -> String {
    Local::now().format("%H:%M").to_string()
}

/// A law domain the assistant can converse about.
///
/// Mirrors the sidebar of the original app: one live domain plus a set of
/// placeholders that are not selectable yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// URL-safe identifier (e.g. "cyber-law")
    pub slug: String,
    /// Display title shown in the chat header
    pub title: String,
    /// Whether the domain can be selected
    pub available: bool,
}

impl Domain {
    /// The default domain, active on first load
    pub fn cyber_law() -> Self {
        Self {
            slug: "cyber-law".to_string(),
            title: "Cyber Law".to_string(),
            available: true,
        }
    }

    /// All known domains, available or not
    pub fn catalog() -> Vec<Domain> {
        vec![
            Self::cyber_law(),
            Self::placeholder("family-law", "Family Law"),
            Self::placeholder("property-law", "Property Law"),
            Self::placeholder("criminal-law", "Criminal Law"),
        ]
    }

    /// Look up a domain by slug
    pub fn find(slug: &str) -> Option<Domain> {
        Self::catalog().into_iter().find(|d| d.slug == slug)
    }

    /// Welcome text shown after switching to this domain
    pub fn welcome_text(&self) -> String {
        format!(
            "Welcome to the {} assistant! How can I help you today?",
            self.title
        )
    }

    fn placeholder(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            available: false,
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::cyber_law()
    }
}
