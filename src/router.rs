use crate::config::{Config, LOGOUT_PATH, ResetConfig};
use crate::db::UserStorage;
use crate::error::XteamError;
use crate::handlers::{
    admin::reset_admin_password_handler, session::logout_handler, storefront::storefront_handler,
};
use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use base64::Engine;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct XteamState {
    pub storage: UserStorage,
    pub reset: Arc<ResetConfig>,
    pub admin_key: Arc<str>,
    pub insecure_cookie: bool,
    cookie_key: Key,
}

impl XteamState {
    pub fn new(
        storage: UserStorage,
        reset: ResetConfig,
        admin_key: Arc<str>,
        cookie_key: Key,
        insecure_cookie: bool,
    ) -> Self {
        Self {
            storage,
            reset: Arc::new(reset),
            admin_key,
            insecure_cookie,
            cookie_key,
        }
    }

    pub fn from_config(storage: UserStorage, cfg: &Config) -> Result<Self, XteamError> {
        let cookie_key = cookie_key(&cfg.basic.cookie_secret)?;
        if cfg.basic.admin_key.is_empty() {
            warn!("basic.admin_key is empty; /admin/reset-password rejects every request");
        }
        Ok(Self::new(
            storage,
            cfg.reset.clone(),
            Arc::from(cfg.basic.admin_key.as_str()),
            cookie_key,
            cfg.basic.insecure_cookie,
        ))
    }

    pub fn secure_cookies(&self) -> bool {
        !self.insecure_cookie
    }
}

impl FromRef<XteamState> for Key {
    fn from_ref(state: &XteamState) -> Self {
        state.cookie_key.clone()
    }
}

/// Decode the configured cookie secret, or generate a throwaway key when unset.
pub fn cookie_key(secret_b64: &str) -> Result<Key, XteamError> {
    let secret = secret_b64.trim();
    if secret.is_empty() {
        warn!("basic.cookie_secret is empty; sessions will not survive a restart");
        return Ok(Key::generate());
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(secret)
        .map_err(|e| XteamError::CookieKey(e.to_string()))?;
    Key::try_from(bytes.as_slice()).map_err(|e| XteamError::CookieKey(e.to_string()))
}

pub fn xteam_router(state: XteamState) -> Router {
    Router::new()
        .route("/", get(storefront_handler))
        .route("/index", get(storefront_handler))
        .route(LOGOUT_PATH, get(logout_handler))
        .route("/admin/reset-password", post(reset_admin_password_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_key_accepts_64_bytes() {
        let secret = base64::engine::general_purpose::STANDARD.encode([7u8; 64]);
        assert!(cookie_key(&secret).is_ok());
    }

    #[test]
    fn cookie_key_rejects_short_or_invalid_secret() {
        let short = base64::engine::general_purpose::STANDARD.encode([7u8; 16]);
        assert!(matches!(cookie_key(&short), Err(XteamError::CookieKey(_))));
        assert!(matches!(cookie_key("%%%"), Err(XteamError::CookieKey(_))));
    }
}
