//! History command - inspect or remove the persisted conversation.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use lex_chat::SessionStore;

#[derive(Args)]
pub struct HistoryArgs {
    /// Print the raw persisted JSON instead of formatted messages
    #[arg(long)]
    raw: bool,
}

pub async fn execute(args: HistoryArgs, data_dir: &Path) -> Result<()> {
    let store = SessionStore::new(data_dir);
    let messages = store.load();

    if messages.is_empty() {
        println!("No chat history yet.");
        return Ok(());
    }

    if args.raw {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    for message in &messages {
        let who = if message.is_user { "You" } else { "Bot" };
        println!("[{}] {}: {}", message.time, who, message.content);
    }
    println!("\n{} messages", messages.len());

    Ok(())
}

pub async fn clear(data_dir: &Path) -> Result<()> {
    let store = SessionStore::new(data_dir);
    store.clear()?;
    println!("🧹 Chat history cleared");
    Ok(())
}
