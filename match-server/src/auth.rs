use base64::Engine;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use match_types::PlayerId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // Subject (player ID)
    pub exp: u64,    // Expiry
}

pub struct AuthService {
    decoding_key: Option<DecodingKey>,
    dev_mode: bool,
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: Some(DecodingKey::from_secret(secret.as_bytes())),
            dev_mode: false,
        }
    }

    pub fn new_dev_mode() -> Self {
        Self {
            decoding_key: None,
            dev_mode: true,
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<PlayerId, AuthError> {
        if self.dev_mode {
            return self.validate_dev_token(token);
        }

        let decoding_key = self.decoding_key.as_ref().ok_or(AuthError::InvalidToken)?;

        let validation = Validation::new(Algorithm::HS256);

        let token_data =
            decode::<TokenClaims>(token, decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    tracing::warn!("Rejected expired token");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("JWT token validation failed: {:?}", e);
                    AuthError::InvalidToken
                }
            })?;

        Self::player_id_from_subject(&token_data.claims.sub)
    }

    fn player_id_from_subject(sub: &str) -> Result<PlayerId, AuthError> {
        uuid::Uuid::parse_str(sub).map_err(|_| {
            tracing::warn!("Token subject is not a valid player id");
            AuthError::InvalidToken
        })
    }

    fn validate_dev_token(&self, token: &str) -> Result<PlayerId, AuthError> {
        // Dev tokens are either a bare player UUID or a JWT whose
        // payload is decoded without any signature check
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() == 3 {
            let payload_b64 = parts[1];

            // Add padding if needed for base64 decoding
            let padded_payload = match payload_b64.len() % 4 {
                0 => payload_b64.to_string(),
                n => format!("{}{}", payload_b64, "=".repeat(4 - n)),
            };

            // Convert URL-safe base64 back to standard base64
            let standard_b64 = padded_payload.replace('-', "+").replace('_', "/");

            let payload_bytes = base64::engine::general_purpose::STANDARD
                .decode(standard_b64)
                .map_err(|e| {
                    tracing::warn!("Failed to decode JWT payload in dev mode: {:?}", e);
                    AuthError::InvalidToken
                })?;

            let claims: TokenClaims = serde_json::from_slice(&payload_bytes).map_err(|e| {
                tracing::warn!("Failed to parse JWT claims in dev mode: {:?}", e);
                AuthError::InvalidToken
            })?;

            Self::player_id_from_subject(&claims.sub)
        } else {
            Self::player_id_from_subject(token.trim())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}
