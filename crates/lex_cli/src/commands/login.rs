//! Login command - submit credentials to the identity provider.

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use lex_auth::{validate_login, IdentityClient};
use lex_chat::ChatConfig;

use super::TOKEN_FILE;

#[derive(Args)]
pub struct LoginArgs {
    /// Account username
    #[arg(short, long)]
    username: String,

    /// Account password
    #[arg(short, long)]
    password: String,
}

pub async fn execute(args: LoginArgs, data_dir: &Path) -> Result<()> {
    let errors = validate_login(&args.username, &args.password);
    if !errors.is_empty() {
        for error in &errors {
            println!("   ❌ {}: {}", error.field, error.message);
        }
        anyhow::bail!("Validation failed");
    }

    let config = ChatConfig::from_settings(data_dir);
    let auth_url = config.auth_url.ok_or_else(|| {
        anyhow::anyhow!(
            "No identity provider configured. Set {} or authUrl in settings.json",
            lex_chat::AUTH_URL_ENV
        )
    })?;

    let client = IdentityClient::new(auth_url);
    let token = client.login(&args.username, &args.password).await?;

    fs::create_dir_all(data_dir)?;
    fs::write(data_dir.join(TOKEN_FILE), token.as_str())?;
    info!("Stored credential token for {}", args.username);

    println!("✅ Login successful!");
    Ok(())
}
