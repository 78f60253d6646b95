// src/common/dev_mode.rs
//! Development mode configuration and utilities
//! Allows bypassing token checks with a fixed session for local testing

use std::env;

use crate::auth::Session;

/// Fixed id so every dev request resolves to the same users row
pub const DEV_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(Debug, Clone)]
pub struct DevModeConfig {
    pub enabled: bool,
    pub user_id: String,
    pub user_role: String,
}

impl DevModeConfig {
    pub fn from_env() -> Self {
        let defaults = Self::disabled();

        let enabled = env::var("DEV_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let user_id = env::var("DEV_USER_ID").unwrap_or(defaults.user_id);

        let user_role = env::var("DEV_USER_ROLE").unwrap_or(defaults.user_role);

        Self {
            enabled,
            user_id,
            user_role,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            user_id: DEV_USER_ID.to_string(),
            user_role: "candidate".to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Session handed to every request while dev mode is on
    pub fn dev_session(&self) -> Session {
        Session {
            user_id: self.user_id.clone(),
            role: self.user_role.clone(),
        }
    }
}

/// Print dev mode status on startup
pub fn print_dev_mode_status(config: &DevModeConfig) {
    if config.enabled {
        println!("⚠️  🔓 DEV MODE ENABLED 🔓 ⚠️");
        println!("   Session tokens are not checked");
        println!("   Dev session: {} (role: {})", config.user_id, config.user_role);
        println!("   ⚠️  DO NOT USE IN PRODUCTION ⚠️");
        println!();
    } else {
        println!("🔒 Production mode - session token required");
    }
}

/// CLI argument parsing for dev mode
pub fn parse_dev_mode_args<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    let mut decision = None;
    for arg in args {
        match arg.as_str() {
            "--dev" | "--dev-mode" => decision = Some(true),
            "--no-dev" | "--prod" | "--production" => decision = Some(false),
            _ => {}
        }
    }

    decision
}

/// Override dev mode from CLI args
pub fn apply_cli_override(mut config: DevModeConfig) -> DevModeConfig {
    if let Some(cli_dev_mode) = parse_dev_mode_args(env::args().skip(1)) {
        println!("🔧 CLI override: DEV_MODE = {}", cli_dev_mode);
        config.enabled = cli_dev_mode;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_disabled_config() {
        let config = DevModeConfig::disabled();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_dev_session_uses_configured_identity() {
        let config = DevModeConfig {
            enabled: true,
            user_id: "dev-42".to_string(),
            user_role: "employer".to_string(),
        };

        let session = config.dev_session();
        assert_eq!(session.user_id, "dev-42");
        assert_eq!(session.role, "employer");
        assert!(!session.is_candidate());
    }

    #[test]
    fn test_cli_args_last_flag_wins() {
        assert_eq!(parse_dev_mode_args(args(&["--dev"])), Some(true));
        assert_eq!(parse_dev_mode_args(args(&["--dev", "--prod"])), Some(false));
        assert_eq!(parse_dev_mode_args(args(&["--port", "9000"])), None);
    }
}
