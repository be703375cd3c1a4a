use crate::entities::users::Role;
use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user or admin id
    pub username: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expires_in: access_expires_in,
        }
    }

    pub fn generate_access_token(&self, id: i64, username: &str, role: Role) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expires_in);

        let claims = Claims {
            sub: id.to_string(),
            username: username.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::JwtError)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AppError::JwtError)
    }

    pub fn get_access_token_expires_in(&self) -> i64 {
        self.access_token_expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_preserves_identity() {
        let service = JwtService::new("test-secret", 3600);
        let token = service
            .generate_access_token(42, "alice", Role::Customer)
            .unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Customer);
    }

    #[test]
    fn test_admin_role_survives_round_trip() {
        let service = JwtService::new("test-secret", 3600);
        let token = service
            .generate_access_token(1, "root", Role::Admin)
            .unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_token_with_wrong_secret_is_rejected() {
        let service = JwtService::new("test-secret", 3600);
        let other = JwtService::new("other-secret", 3600);
        let token = service
            .generate_access_token(42, "alice", Role::Customer)
            .unwrap();

        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = JwtService::new("test-secret", 3600);
        let mut token = service
            .generate_access_token(42, "alice", Role::Customer)
            .unwrap();
        token.push('x');

        assert!(service.verify_access_token(&token).is_err());
    }
}
