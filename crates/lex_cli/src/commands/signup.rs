//! Signup command - create an account with the identity provider.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use lex_auth::{validate_signup, IdentityClient, SignupForm};
use lex_chat::ChatConfig;

#[derive(Args)]
pub struct SignupArgs {
    /// Account username (min 3 characters)
    #[arg(short, long)]
    username: String,

    /// Account email address
    #[arg(short, long)]
    email: String,

    /// Account password (min 6 characters)
    #[arg(short, long)]
    password: String,

    /// Password confirmation
    #[arg(long)]
    confirm_password: String,
}

pub async fn execute(args: SignupArgs, data_dir: &Path) -> Result<()> {
    let form = SignupForm {
        username: args.username,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };

    let errors = validate_signup(&form);
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
    client.signup(&form).await?;

    println!("✅ Account created successfully! Please log in.");
    Ok(())
}
