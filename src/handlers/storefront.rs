use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::config::LOGIN_PATH;
use crate::pages::storefront::{Access, check_access, render_storefront};
use crate::session::Session;

/// GET / -> storefront shell for signed-in users, `302` to the login page otherwise.
pub async fn storefront_handler(session: Session) -> Response {
    match check_access(&session) {
        Access::Member(username) => Html(render_storefront(username)).into_response(),
        Access::Anonymous => {
            debug!("no usuario in session; redirecting to login");
            login_redirect()
        }
    }
}

/// Bare `302 Found` with no body.
pub fn login_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response()
}
