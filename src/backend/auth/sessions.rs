/**
 * Session Tokens
 *
 * This module signs and verifies the two kinds of token the server issues:
 *
 * - **Access tokens** (`aud = "authbox:auth"`) prove identity on protected
 *   routes. Subject is the user ID.
 * - **Reset tokens** (`aud = "authbox:reset"`) authorize one password change.
 *   They embed a fingerprint of the password hash at issuance, so the token
 *   stops verifying as soon as the password changes.
 *
 * Both are HS256 JWTs signed with the configured secret. Nothing is stored
 * server side; a token is valid while its signature, audience and expiry
 * check out.
 */

use jsonwebtoken::{decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::shared::ServerConfig;

/// Audience of access tokens
pub const ACCESS_AUDIENCE: &str = "authbox:auth";

/// Audience of password reset tokens
pub const RESET_AUDIENCE: &str = "authbox:reset";

/// Access token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (decimal string)
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// User ID carried in `sub`, if it is a valid integer
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Reset token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    /// User ID (decimal string)
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Fingerprint of the password hash at issuance
    pub pfp: String,
}

impl ResetClaims {
    /// User ID carried in `sub`, if it is a valid integer
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Token response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Signing material and lifetimes
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_lifetime_secs: u64,
    reset_token_lifetime_secs: u64,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("token_lifetime_secs", &self.token_lifetime_secs)
            .field("reset_token_lifetime_secs", &self.reset_token_lifetime_secs)
            .finish_non_exhaustive()
    }
}

impl SessionKeys {
    /// Create keys from a shared secret
    pub fn new(secret: &[u8], token_lifetime_secs: u64, reset_token_lifetime_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            token_lifetime_secs,
            reset_token_lifetime_secs,
        }
    }

    /// Create keys from the server configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.token_lifetime_secs,
            config.reset_token_lifetime_secs,
        )
    }

    /// Create an access token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID
    ///
    /// # Returns
    /// JWT token string
    pub fn create_token(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let now = get_current_timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            aud: ACCESS_AUDIENCE.to_string(),
            exp: now + self.token_lifetime_secs,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode an access token
    ///
    /// Fails on a bad signature, an expired token, or a token minted for
    /// another audience.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = validation_for(ACCESS_AUDIENCE);
        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }

    /// Create a reset token bound to the user's current password hash
    pub fn create_reset_token(
        &self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = get_current_timestamp();

        let claims = ResetClaims {
            sub: user_id.to_string(),
            aud: RESET_AUDIENCE.to_string(),
            exp: now + self.reset_token_lifetime_secs,
            iat: now,
            pfp: password_fingerprint(password_hash),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a reset token
    ///
    /// The fingerprint is not checked here; the caller compares it against
    /// the stored hash.
    pub fn verify_reset_token(&self, token: &str) -> Result<ResetClaims, jsonwebtoken::errors::Error> {
        let validation = validation_for(RESET_AUDIENCE);
        let token_data = decode::<ResetClaims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

fn validation_for(audience: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_audience(&[audience]);
    validation.set_required_spec_claims(&["exp", "sub", "aud"]);
    validation
}

/// SHA-256 fingerprint of a password hash, hex encoded
pub fn password_fingerprint(password_hash: &str) -> String {
    hex::encode(Sha256::digest(password_hash.as_bytes()))
}
