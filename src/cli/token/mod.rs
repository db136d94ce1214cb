//! Token command - mints a session token with the configured secret

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{AccountId, UserId};
use crate::infrastructure::auth::{JwtConfig, JwtService};

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Acting user ID
    #[arg(long)]
    pub user_id: i64,

    /// Account the session acts on
    #[arg(long)]
    pub account_id: i64,

    /// Override the configured expiration
    #[arg(long)]
    pub expiration_hours: Option<u64>,
}

/// Print a token for the given user and account
pub async fn run(args: TokenArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let token = mint(&config, &args)?;

    println!("{}", token);
    Ok(())
}

fn mint(config: &AppConfig, args: &TokenArgs) -> anyhow::Result<String> {
    let secret = config.auth.resolve_secret().ok_or_else(|| {
        anyhow::anyhow!("No JWT secret configured; set auth.jwt_secret or JWT_SECRET")
    })?;

    let hours = args
        .expiration_hours
        .unwrap_or(config.auth.token_expiration_hours);
    let jwt = JwtService::new(JwtConfig::new(secret, hours));

    Ok(jwt.generate(UserId::new(args.user_id), AccountId::new(args.account_id))?)
}
