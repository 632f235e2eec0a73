//! Session Cookie Helpers
//!
//! Moves the raw session token between the core and HTTP headers. The cookie
//! lifetime tracks the session's remaining lifetime so a renewed session
//! also refreshes the cookie.

use chrono::{DateTime, Utc};
use http::{HeaderMap, HeaderValue, header};

use platform::cookie::extract_cookie;

use crate::application::config::SessionConfig;
use crate::domain::entity::session::Session;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// `Set-Cookie` value carrying `token` for `session`
pub fn session_cookie(
    config: &SessionConfig,
    token: &SessionToken,
    session: &Session,
    now: DateTime<Utc>,
) -> String {
    let max_age = session.remaining_at(now).num_seconds();
    config
        .cookie_config(Some(max_age))
        .build_set_cookie(token.expose())
}

/// `Set-Cookie` value that clears the session cookie
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    config.cookie_config(None).build_delete_cookie()
}

/// Read the session token from request headers
pub fn token_from_headers(config: &SessionConfig, headers: &HeaderMap) -> Option<SessionToken> {
    extract_cookie(headers, &config.cookie_name).map(SessionToken::from_presented)
}

/// Append a `Set-Cookie` header
pub fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) -> AuthResult<()> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie header: {}", e)))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_session_cookie_max_age_tracks_expiry() {
        let config = SessionConfig::default();
        let token = SessionToken::from_presented("tok");
        let session = Session::new(
            SessionId::derive(&token),
            UserId::new(1),
            t0(),
            Duration::days(30),
        );

        let cookie = session_cookie(&config, &token, &session, t0() + Duration::days(1));
        assert!(cookie.starts_with("session=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains(&format!("Max-Age={}", 29 * 24 * 3600)));
    }

    #[test]
    fn test_clear_cookie() {
        let cookie = clear_session_cookie(&SessionConfig::development());
        assert!(cookie.starts_with("session=;"));
        assert!(!cookie.contains("Secure"));
        assert!(cookie.ends_with("Max-Age=0"));
    }

    #[test]
    fn test_token_roundtrip_through_headers() {
        let config = SessionConfig::default();
        let token = SessionToken::generate(config.token_bytes);
        let session = Session::new(SessionId::derive(&token), UserId::new(1), t0(), Duration::days(30));

        let mut response = HeaderMap::new();
        append_set_cookie(&mut response, &session_cookie(&config, &token, &session, t0())).unwrap();
        assert_eq!(response.get_all(header::SET_COOKIE).iter().count(), 1);

        let mut request = HeaderMap::new();
        request.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; session={}", token.expose())).unwrap(),
        );
        assert_eq!(token_from_headers(&config, &request), Some(token));
    }

    #[test]
    fn test_missing_cookie() {
        assert!(token_from_headers(&SessionConfig::default(), &HeaderMap::new()).is_none());
    }
}
