//! Chat command - interactive conversation loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use lex_chat::{ChatConfig, ChatController, ChatError, ChatView, Domain, Message, SessionStore};

use super::TOKEN_FILE;

#[derive(Args)]
pub struct ChatArgs {
    /// Remote responder endpoint (overrides settings and environment)
    #[arg(long)]
    endpoint: Option<String>,

    /// Law domain to open the conversation with
    #[arg(short, long)]
    domain: Option<String>,
}

/// What the loop should do after handling one input line.
#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Continue,
    Quit,
}

/// Renders the conversation to the terminal.
struct TerminalView;

impl ChatView for TerminalView {
    fn message_added(&mut self, message: &Message) {
        let who = if message.is_user { "You" } else { "Bot" };
        println!("[{}] {}: {}", message.time, who, message.content);
    }

    fn typing_started(&mut self) {
        println!("Bot is typing...");
    }

    fn typing_cleared(&mut self) {}

    fn conversation_cleared(&mut self) {
        println!("--- conversation cleared ---");
    }
}

pub async fn execute(args: ChatArgs, data_dir: &Path) -> Result<()> {
    let mut config = ChatConfig::from_settings(data_dir);
    if args.endpoint.is_some() {
        config.api_url = args.endpoint;
    }

    let domain = resolve_domain(args.domain.as_deref().or(config.domain.as_deref()))?;
    info!("Starting chat in the {} domain", domain.title);

    let token = read_token(data_dir);
    let responder = config.build_responder(token);
    let store = SessionStore::new(data_dir);

    println!("💬 LexBuddy - {} assistant", domain.title);
    println!("   Type your question, /domains to list domains, exit to quit.\n");

    let mut controller = ChatController::new(store, responder, Box::new(TerminalView), domain)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        if handle_line(&mut controller, line.trim()).await == LoopAction::Quit {
            break;
        }
    }

    Ok(())
}

/// Handle one input line.
///
/// No chat failure ends the session: a persist or responder error is
/// reported and the loop keeps accepting input.
async fn handle_line(controller: &mut ChatController, line: &str) -> LoopAction {
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        println!("Goodbye!");
        return LoopAction::Quit;
    }

    if line == "/domains" {
        list_domains(controller.domain());
        return LoopAction::Continue;
    }

    if let Some(slug) = line.strip_prefix("/domain ") {
        handle_domain_switch(controller, slug.trim());
        return LoopAction::Continue;
    }

    if let Err(e) = controller.submit(line).await {
        println!("⚠️  Could not process message: {}", e);
    }
    LoopAction::Continue
}

fn resolve_domain(slug: Option<&str>) -> Result<Domain> {
    let domain = match slug {
        Some(slug) => {
            Domain::find(slug).ok_or_else(|| ChatError::UnknownDomain(slug.to_string()))?
        }
        None => Domain::default(),
    };

    if !domain.available {
        anyhow::bail!("{} is coming soon!", domain.title);
    }
    Ok(domain)
}

fn handle_domain_switch(controller: &mut ChatController, slug: &str) {
    let Some(domain) = Domain::find(slug) else {
        println!("⚠️  Unknown law domain: {}", slug);
        return;
    };

    match controller.switch_domain(domain) {
        Ok(()) => {}
        Err(ChatError::DomainUnavailable(title)) => {
            println!("⚠️  {} is coming soon!", title);
        }
        Err(e) => {
            println!("⚠️  Could not switch domain: {}", e);
        }
    }
}

fn list_domains(active: &Domain) {
    println!("Available domains:");
    for domain in Domain::catalog() {
        let marker = if domain.slug == active.slug {
            "▶"
        } else if domain.available {
            " "
        } else {
            "·"
        };
        let note = if domain.available { "" } else { " (coming soon)" };
        println!("  {} {} [{}]{}", marker, domain.title, domain.slug, note);
    }
}

/// Read the stored credential token, if any
fn read_token(data_dir: &Path) -> Option<String> {
    let path = data_dir.join(TOKEN_FILE);
    std::fs::read_to_string(path)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
