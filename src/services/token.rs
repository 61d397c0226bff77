// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session tokens persisted under `rewear_token`.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Session lifetime.
pub const SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Create a signed session token for a user.
pub fn create_session_token(user_id: &str, signing_key: &[u8], now: DateTime<Utc>) -> Result<String> {
    let iat = now.timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Decode a session token, checking its signature and that it has not
/// expired as of `now`.
pub fn verify_session_token(token: &str, signing_key: &[u8], now: DateTime<Utc>) -> Result<Claims> {
    let key = DecodingKey::from_secret(signing_key);
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked against the caller's clock below
    validation.validate_exp = false;

    let claims = decode::<Claims>(token, &key, &validation)?.claims;
    if claims.exp <= now.timestamp() {
        return Err(jsonwebtoken::errors::Error::from(ErrorKind::ExpiredSignature).into());
    }
    Ok(claims)
}
