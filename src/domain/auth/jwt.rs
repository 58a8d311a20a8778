use crate::domain::feed::{Viewer, ViewerRole};
use crate::error::{AppError, AppResult};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by viewer tokens. Tokens are issued elsewhere; this
/// service only verifies them.
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewerClaims {
    pub sub: String, // User ID
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub role: ViewerRole,
    pub exp: i64,
    pub iat: i64,
}

impl From<ViewerClaims> for Viewer {
    fn from(claims: ViewerClaims) -> Self {
        Viewer::identified(claims.sub, claims.interests).with_role(claims.role)
    }
}

pub struct JwtManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Validate a JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> AppResult<ViewerClaims> {
        decode::<ViewerClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    /// Resolve the viewer a token identifies
    pub fn viewer_from_token(&self, token: &str) -> AppResult<Viewer> {
        let claims = self.validate_token(token)?;
        if claims.sub.trim().is_empty() {
            return Err(AppError::Unauthorized("Token has no subject".to_string()));
        }
        Ok(claims.into())
    }
}
