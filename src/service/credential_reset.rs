use crate::config::{ADMIN_USERNAME, ResetConfig};
use crate::db::schema::UPDATE_PASSWORD_HASH;
use crate::db::statement::{BoundStatement, UserStore};
use crate::error::XteamError;
use crate::service::password::hash_password;
use tracing::{info, warn};

pub const SUCCESS_NOTICE: &str = "Admin password updated successfully.";

/// Result of a successful reset.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub username: &'static str,
    pub password_hash: String,
}

/// Overwrite the `admin` record's hash with a fresh hash of the configured plaintext.
///
/// Hashing runs on the blocking pool. The store holds its connection only for
/// the single update.
pub async fn reset_admin_password<S: UserStore>(
    store: &S,
    settings: &ResetConfig,
) -> Result<PasswordReset, XteamError> {
    if settings.uses_default_password() {
        warn!(
            username = ADMIN_USERNAME,
            "resetting to the built-in default password; set reset.password to override"
        );
    }

    let plaintext = settings.password.clone();
    let cost = settings.hash;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&plaintext, cost))
        .await
        .map_err(|e| XteamError::PasswordHash(e.to_string()))??;

    let statement = BoundStatement::new(UPDATE_PASSWORD_HASH)
        .bind(password_hash.as_str())
        .bind(ADMIN_USERNAME);

    let rows = store.execute(&statement).await?;
    if rows == 0 {
        return Err(XteamError::StoreWrite(format!(
            "no user record matches username `{ADMIN_USERNAME}`"
        )));
    }

    info!(username = ADMIN_USERNAME, "admin password hash replaced");
    Ok(PasswordReset {
        username: ADMIN_USERNAME,
        password_hash,
    })
}

/// Operator-facing line for either outcome.
pub fn notice(result: &Result<PasswordReset, XteamError>) -> String {
    match result {
        Ok(_) => SUCCESS_NOTICE.to_string(),
        Err(e) => format!("Error: {e}"),
    }
}
