use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::error::XteamError;
use crate::middleware::auth::RequireAdminKey;
use crate::router::XteamState;
use crate::service::credential_reset::{SUCCESS_NOTICE, reset_admin_password};

/// POST /admin/reset-password -> plain-text notice of the outcome.
pub async fn reset_admin_password_handler(
    State(state): State<XteamState>,
    _auth: RequireAdminKey,
) -> Response {
    match reset_admin_password(&state.storage, &state.reset).await {
        Ok(_) => (StatusCode::OK, SUCCESS_NOTICE).into_response(),
        Err(e) => {
            if matches!(e, XteamError::StoreConnection(_)) {
                error!(error = %e, "admin password reset could not reach the store");
            } else {
                warn!(error = %e, "admin password reset failed");
            }
            e.into_response()
        }
    }
}
