//! Caller session carried in an encrypted private cookie.
//!
//! The cookie value is the JSON attribute map. Whatever signs a user in writes
//! it with [`Session::store`]; pages only read it.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use time::Duration;
use tracing::debug;

pub const SESSION_COOKIE: &str = "xteam_session";

/// Attribute holding the signed-in username.
pub const USER_ATTRIBUTE: &str = "usuario";

const SESSION_TTL: Duration = Duration::hours(12);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    attributes: BTreeMap<String, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.get(USER_ATTRIBUTE)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Missing, tampered and malformed cookies all read as an empty session.
    pub fn from_jar(jar: &PrivateCookieJar) -> Self {
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Self::default();
        };
        match serde_json::from_str(cookie.value()) {
            Ok(session) => session,
            Err(e) => {
                debug!(error = %e, "discarding undecodable session cookie");
                Self::default()
            }
        }
    }

    pub fn store(&self, jar: PrivateCookieJar, secure: bool) -> PrivateCookieJar {
        // A BTreeMap<String, String> always serializes.
        let value = serde_json::to_string(&self.attributes).unwrap_or_default();
        jar.add(build_cookie(value, secure))
    }

    pub fn clear(jar: PrivateCookieJar, secure: bool) -> PrivateCookieJar {
        jar.remove(clear_cookie(secure))
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Self::from_jar(&jar))
    }
}

fn build_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .build()
}

fn clear_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}
