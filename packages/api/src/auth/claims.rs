//! # Token claims
//!
//! A session token is three dot-separated segments; the middle one is the
//! base64url-encoded JSON claims payload. The client only ever reads the
//! payload. It never verifies the signature and never re-encodes a token.
//!
//! ```text
//! eyJhbGciOiJIUzI1NiJ9 . eyJ1c2VybmFtZSI6InNhbSIsImV4cCI6MTcwMDAwMDAwMH0 . c2ln
//!        header                       {"username":"sam","exp":1700000000}      signature
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Why a token could not be decoded. Callers treat every variant as "no session".
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims read from a session token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject principal, read from `username` or else `sub`.
    pub username: String,
    /// Expiration time (Unix timestamp). `None` never expires.
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
struct RawClaims {
    username: Option<String>,
    sub: Option<String>,
    /// NumericDate, which may carry a fraction.
    exp: Option<f64>,
}

impl Claims {
    /// True iff an expiry is present and `now` has reached it.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| now >= exp)
    }
}

/// True if `token` is three dot-separated segments.
pub fn has_token_shape(token: &str) -> bool {
    token.split('.').count() == 3
}

/// Decode the claims payload of `token`.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::Malformed);
    };

    // Some issuers pad base64url; the unpadded engine rejects '='.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;

    let username = raw.username.or(raw.sub).ok_or_else(|| {
        DecodeError::Json(serde::de::Error::missing_field("username"))
    })?;

    // Whole seconds compare against `now` exactly when rounded up:
    // `now >= 10.5` holds iff `now >= 11`.
    Ok(Claims {
        username,
        exp: raw.exp.map(|exp| exp.ceil() as i64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_username_and_exp() {
        let claims = decode(&token_with(r#"{"username":"sam","exp":1700000000}"#)).unwrap();
        assert_eq!(claims.username, "sam");
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn test_decode_fractional_exp() {
        let future = decode(&token_with(r#"{"username":"sam","exp":4102444800.5}"#)).unwrap();
        assert_eq!(future.exp, Some(4_102_444_801));
        assert!(!future.is_expired(1_700_000_000));
        assert!(!future.is_expired(4_102_444_800));
        assert!(future.is_expired(4_102_444_801));

        let past = decode(&token_with(r#"{"username":"sam","exp":1000.25}"#)).unwrap();
        assert!(past.is_expired(1_700_000_000));
        assert!(!past.is_expired(1000));
    }

    #[test]
    fn test_decode_falls_back_to_sub() {
        let claims = decode(&token_with(r#"{"sub":"alex","iat":1}"#)).unwrap();
        assert_eq!(claims.username, "alex");
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_decode_accepts_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"username":"a"}"#);
        assert!(payload.ends_with('='));
        let claims = decode(&format!("h.{payload}.s")).unwrap();
        assert_eq!(claims.username, "a");
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert!(matches!(decode("abc.def"), Err(DecodeError::Malformed)));
        assert!(matches!(decode("a.b.c.d"), Err(DecodeError::Malformed)));
        assert!(matches!(decode(""), Err(DecodeError::Malformed)));
    }

    #[test]
    fn test_decode_rejects_bad_payload() {
        assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Base64(_))));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode(&not_json), Err(DecodeError::Json(_))));
        let no_subject = token_with(r#"{"exp":5}"#);
        assert!(matches!(decode(&no_subject), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims {
            username: "sam".into(),
            exp: Some(100),
        };
        assert!(!claims.is_expired(99));
        assert!(claims.is_expired(100));
        assert!(claims.is_expired(101));
    }

    #[test]
    fn test_no_exp_never_expires() {
        let claims = Claims {
            username: "sam".into(),
            exp: None,
        };
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn test_has_token_shape() {
        assert!(has_token_shape("a.b.c"));
        assert!(has_token_shape(".."));
        assert!(!has_token_shape("abc.def"));
        assert!(!has_token_shape("abc"));
    }
}
