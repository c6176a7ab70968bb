use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::info;

use crate::handlers::storefront::login_redirect;
use crate::router::XteamState;
use crate::session::Session;

/// GET /logout -> drops the session cookie and sends the caller to the login page.
pub async fn logout_handler(State(state): State<XteamState>, jar: PrivateCookieJar) -> Response {
    if let Some(username) = Session::from_jar(&jar).username() {
        info!(username = %username, "session closed");
    }
    (Session::clear(jar, state.secure_cookies()), login_redirect()).into_response()
}
