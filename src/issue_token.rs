// issue_token.rs
// Utility to mint a session token for local testing against /api/profile

#![allow(dead_code)]

#[path = "auth/tokens.rs"]
mod tokens;

use anyhow::{anyhow, Context};
use chrono::Duration;
use dotenv::dotenv;
use std::env;

use tokens::{issue_session_token, DEFAULT_JWT_SECRET, SESSION_TTL_HOURS};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let mut args = env::args().skip(1);
    let user_id = args
        .next()
        .ok_or_else(|| anyhow!("usage: issue_session_token <user_id> [role] [ttl_hours]"))?;
    let role = args.next().unwrap_or_else(|| "candidate".to_string());
    let ttl_hours = match args.next() {
        Some(raw) => raw
            .parse::<i64>()
            .with_context(|| format!("ttl_hours must be a whole number, got `{}`", raw))?,
        None => SESSION_TTL_HOURS,
    };

    let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
        eprintln!("⚠️  JWT_SECRET not set, signing with the development secret");
        DEFAULT_JWT_SECRET.to_string()
    });

    let token = issue_session_token(&secret, &user_id, &role, Duration::hours(ttl_hours))?;

    println!("✅ Session token for {} (role: {}, valid {}h)\n", user_id, role, ttl_hours);
    println!("Send it as:");
    println!("─────────────────────────────────────────────────");
    println!("Authorization: Bearer {}", token);
    println!("─────────────────────────────────────────────────");

    Ok(())
}
