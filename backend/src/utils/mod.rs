//! Small request-level helpers shared across handlers and middleware.
//!
//! Cookie parsing and construction live here so the session format is written
//! down exactly once.

use axum::http::{header, HeaderMap, HeaderValue};

/// Name of the session cookie issued on login.
pub const SESSION_COOKIE: &str = "evaldesk_session";

/// Pull a named cookie out of the request headers.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        if let Some((key, value)) = part.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// `Set-Cookie` value establishing the session.
pub fn session_cookie(sid: &str) -> HeaderValue {
    // Hex sids only, so the value is always a valid header.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={sid}; HttpOnly; SameSite=Lax; Path=/"
    ))
    .unwrap()
}

/// `Set-Cookie` value that expires the session immediately.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    ))
    .unwrap()
}

/// Random identifier for sessions: `n` bytes of OS entropy, hex-encoded.
/// An entropy failure is an error; a zeroed buffer must never become a
/// session id.
pub fn random_token(n: usize) -> Result<String, getrandom::Error> {
    let mut bytes = vec![0u8; n];
    getrandom::getrandom(&mut bytes)?;
    Ok(hex::encode(bytes))
}
