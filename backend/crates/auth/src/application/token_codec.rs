//! Session Token Codec
//!
//! Issues and verifies HS256 JWTs carrying `{sub, roles, iat, exp}`.
//! Pure: no I/O, and `now` is always supplied by the caller.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::config::AuthConfig;

/// Token verification failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Wrong segment count, bad base64url, or header/claims not the expected JSON
    #[error("malformed token")]
    Malformed,

    /// Signature mismatch or unexpected algorithm
    #[error("invalid token signature")]
    SignatureInvalid,

    #[error("token expired")]
    Expired,

    /// Signing failed while issuing
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Role names, in stored order
    pub roles: Vec<String>,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Caller identity recovered from a valid token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedPrincipal {
    pub subject: String,
    pub roles: Vec<String>,
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// HS256 session token codec
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock instead
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Sign a token for `subject` valid from `now` for the configured TTL
    ///
    /// `iat`/`exp` are whole seconds: `now` is truncated, so a token can live
    /// up to one second less than the TTL.
    pub fn issue(
        &self,
        subject: &str,
        roles: &[String],
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat,
            exp: iat + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Check structure, then signature, then expiry
    ///
    /// A token is still valid at exactly its `exp` second.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedPrincipal, TokenError> {
        let (header, _) = split_unverified(token)?;
        if header.alg != "HS256" {
            return Err(TokenError::SignatureInvalid);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::InvalidToken | JwtErrorKind::Json(_) | JwtErrorKind::Utf8(_) => {
                    TokenError::Malformed
                }
                // InvalidSignature, InvalidAlgorithm, Base64 of the signature segment
                _ => TokenError::SignatureInvalid,
            }
        })?;

        let claims = data.claims;
        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;
        if now > expires_at {
            return Err(TokenError::Expired);
        }

        Ok(VerifiedPrincipal {
            subject: claims.sub,
            roles: claims.roles,
        })
    }
}

/// Decode header and claims without checking the signature
fn split_unverified(token: &str) -> Result<(RawHeader, Claims), TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(claims), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    Ok((decode_segment(header)?, decode_segment(claims)?))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = platform::crypto::from_base64url(segment).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
