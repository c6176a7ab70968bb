use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Username of the record the credential reset targets.
pub const ADMIN_USERNAME: &str = "admin";

/// Plaintext written by the credential reset unless `reset.password` overrides it.
pub const DEFAULT_RESET_PASSWORD: &str = "Admin123!";

/// Static login page unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login.html";

/// Endpoint that drops the session cookie.
pub const LOGOUT_PATH: &str = "/logout";

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "XTEAM_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub reset: ResetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Shared secret for `/admin/reset-password`. Empty keeps the route locked.
    pub admin_key: String,
    /// Base64 key material (at least 64 bytes) for the session cookie.
    /// Empty generates a fresh key per process, dropping sessions on restart.
    pub cookie_secret: String,
    pub insecure_cookie: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:xteam.db".to_string(),
            loglevel: "info".to_string(),
            admin_key: String::new(),
            cookie_secret: String::new(),
            insecure_cookie: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetConfig {
    pub password: String,
    pub hash: HashCost,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_RESET_PASSWORD.to_string(),
            hash: HashCost::default(),
        }
    }
}

impl ResetConfig {
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_RESET_PASSWORD
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashCost {
    pub memory_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            time_cost: 3,
            parallelism: 1,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` in the working directory, then `XTEAM_*` env vars.
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        figment::Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg.basic.listen_addr, "0.0.0.0:8000");
            assert!(cfg.basic.admin_key.is_empty());
            assert!(cfg.reset.uses_default_password());
            assert_eq!(cfg.reset.hash, HashCost::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [basic]
                database_url = "sqlite:from-file.db"
                admin_key = "file-key"

                [reset.hash]
                time_cost = 5
                "#,
            )?;
            jail.set_env("XTEAM_BASIC__ADMIN_KEY", "env-key");
            jail.set_env("XTEAM_RESET__PASSWORD", "S3cure-Elsewhere");

            let cfg = Config::load()?;
            assert_eq!(cfg.basic.database_url, "sqlite:from-file.db");
            assert_eq!(cfg.basic.admin_key, "env-key");
            assert_eq!(cfg.reset.hash.time_cost, 5);
            assert_eq!(cfg.reset.hash.memory_kib, 19 * 1024);
            assert!(!cfg.reset.uses_default_password());
            Ok(())
        });
    }
}
