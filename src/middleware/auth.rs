use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use headers::authorization::{Authorization, Bearer};
use headers::HeaderMapExt;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::router::XteamState;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

fn key_matches(candidate: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(candidate.as_bytes().ct_eq(expected.as_bytes()))
}

/// Ensure the inbound request carries the admin key.
/// Accepts either:
/// - Header: `x-admin-key: ...`
/// - Header: `Authorization: Bearer ...`
/// - Query string: `?key=...`
///
/// An empty configured key matches nothing.
pub fn ensure_admin(headers: &HeaderMap, query: Option<&str>, expected: &str) -> Result<(), Response> {
    if let Some(hv) = headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok())
        && key_matches(hv, expected)
    {
        return Ok(());
    }

    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>()
        && key_matches(bearer.token(), expected)
    {
        return Ok(());
    }

    if let Some(qs) = query {
        for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
            if k == "key" && key_matches(&v, expected) {
                return Ok(());
            }
        }
    }

    warn!("rejected admin request with invalid or missing key");
    Err((StatusCode::UNAUTHORIZED, "Error: invalid or missing admin key.").into_response())
}

#[derive(Debug, Clone, Copy)]
pub struct RequireAdminKey;

impl FromRequestParts<XteamState> for RequireAdminKey {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &XteamState,
    ) -> Result<Self, Self::Rejection> {
        ensure_admin(&parts.headers, parts.uri.query(), &state.admin_key)?;
        Ok(Self)
    }
}
