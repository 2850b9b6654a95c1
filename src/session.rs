use axum_extra::extract::CookieJar;

use crate::portfolio::Session;

pub const SESSION_COOKIE: &str = "portfolio_session";

/// A session exists when the request carries the session cookie and it matches the
/// configured token. Without a configured token nobody is signed in.
pub fn session_from_jar(jar: &CookieJar, token: Option<&str>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    jar.get(SESSION_COOKIE)
        .filter(|cookie| cookie.value() == token)
        .map(|_| Session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{header::COOKIE, HeaderMap, HeaderValue};

    fn jar(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_matching_cookie_is_a_session() {
        let jar = jar("theme=dark; portfolio_session=abc123");
        assert_eq!(session_from_jar(&jar, Some("abc123")), Some(Session));
    }

    #[test]
    fn test_repeated_cookie_uses_last_value() {
        let jar = jar("portfolio_session=stale; portfolio_session=abc123");
        assert_eq!(session_from_jar(&jar, Some("abc123")), Some(Session));
    }

    #[test]
    fn test_wrong_token_is_anonymous() {
        let jar = jar("portfolio_session=nope");
        assert_eq!(session_from_jar(&jar, Some("abc123")), None);
    }

    #[test]
    fn test_no_cookie_is_anonymous() {
        assert_eq!(session_from_jar(&CookieJar::new(), Some("abc123")), None);
        let jar = jar("other=abc123");
        assert_eq!(session_from_jar(&jar, Some("abc123")), None);
    }

    #[test]
    fn test_unconfigured_token_is_anonymous() {
        let jar = jar("portfolio_session=");
        assert_eq!(session_from_jar(&jar, None), None);
        assert_eq!(session_from_jar(&jar, Some("")), None);
    }
}
