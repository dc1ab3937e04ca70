//! Session gating for the admin surface.
//!
//! Authorization is a value, not an exception: `require_session` answers
//! either `Authorized` with the live session or `Redirect` with the login
//! target, and the routing layer turns the latter into a 303. No data query
//! is issued until the check has passed.

use axum::http::{header, HeaderMap};
use tracing::warn;

use crate::config::Config;
use crate::models::Session;
use crate::supabase::SupabaseClient;

/// Outcome of the admin session check.
#[derive(Debug)]
pub enum AuthCheck {
    Authorized(Session),
    Redirect(String),
}

/// Resolve the caller's access token into a session, or the login redirect.
///
/// A missing token short-circuits without touching the auth service; a
/// token the auth service rejects, or an unreachable auth service, also
/// ends in the redirect. Unauthenticated access never reaches the data
/// layer.
pub async fn require_session(
    db: &SupabaseClient,
    config: &Config,
    access_token: Option<&str>,
) -> AuthCheck {
    let token = match access_token {
        Some(token) if !token.is_empty() => token,
        _ => return AuthCheck::Redirect(config.login_route.clone()),
    };

    match db.session(token).await {
        Ok(Some(session)) => AuthCheck::Authorized(session),
        Ok(None) => AuthCheck::Redirect(config.login_route.clone()),
        Err(e) => {
            warn!("Session lookup failed: {:#}", e);
            AuthCheck::Redirect(config.login_route.clone())
        }
    }
}

/// Pull the Supabase access token out of a request.
///
/// Page navigations carry it in the `sb-access-token` cookie (where
/// supabase-js keeps its session); the JSON API also accepts a bearer
/// `Authorization` header.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookies.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next() == Some("sb-access-token") {
                if let Some(token) = parts.next() {
                    if !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}
