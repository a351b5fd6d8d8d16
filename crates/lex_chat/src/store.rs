//! Session store - durable round-trip of the session log.
//!
//! The conversation is persisted as a single JSON file under the data
//! directory (the Rust counterpart of the web client's one localStorage
//! slot). Every save overwrites the whole log; there is no incremental
//! append and no schema version tag.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ChatResult;
use crate::types::Message;

const HISTORY_FILE: &str = "chat_history.json";

/// Persistence for the session log.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(HISTORY_FILE),
        }
    }

    /// Path of the history slot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session log.
    ///
    /// Fails soft: a missing slot yields an empty log, and a corrupt slot is
    /// discarded (the file is removed) before returning an empty log. The
    /// caller is responsible for re-seeding the welcome message.
    pub fn load(&self) -> Vec<Message> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read chat history, resetting: {}", e);
                self.discard_corrupt();
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Chat history is malformed, resetting: {}", e);
                self.discard_corrupt();
                Vec::new()
            }
        }
    }

    /// Persist the full session log, overwriting any previous state
    pub fn save(&self, messages: &[Message]) -> ChatResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(messages)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the persisted slot entirely (used on domain switch)
    pub fn clear(&self) -> ChatResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn discard_corrupt(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to remove corrupt chat history: {}", e);
        }
    }
}
