//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 액세스 토큰의 발급과 검증을 담당합니다.
//! 토큰은 사용자 ID(`sub`)와 만료 시각(`exp`)을 담으며, 기본 수명은 1시간입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use crate::config::{JwtConfig, DEFAULT_TOKEN_TTL_MINUTES};
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// 서명 비밀키는 외부 설정 제공자가 주입합니다. 비밀키가 없으면
/// 발급은 `TokenIssuanceError`, 검증은 `AuthenticationError`로 실패합니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    secret: Option<String>,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: Option<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            ttl,
        }
    }

    /// 기본 수명(1시간)을 사용하는 서비스
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self::new(Some(secret.into()), Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_MINUTES` 환경 변수 기반 생성
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), Duration::minutes(JwtConfig::expiration_minutes()))
    }

    /// 토큰 수명 (초 단위)
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// 사용자 ID에 대한 서명된 토큰을 생성합니다.
    ///
    /// 레코드에 저장하는 일은 호출자([`CredentialService`](super::CredentialService))가 담당합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenIssuanceError` - 비밀키 누락 또는 서명 실패
    pub fn sign(&self, user_id: &ObjectId) -> AppResult<(String, TokenClaims)> {
        let secret = self.secret.as_deref().ok_or_else(|| {
            AppError::TokenIssuanceError("토큰 서명 비밀키가 설정되지 않았습니다".to_string())
        })?;

        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_hex(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let token = encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::TokenIssuanceError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok((token, claims))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 서명/형식, 비밀키 누락
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = self.secret.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("토큰을 검증할 수 없습니다".to_string())
        })?;

        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// 토큰에서 사용자 ID 추출
    pub fn extract_user_id(&self, token: &str) -> AppResult<ObjectId> {
        let claims = self.verify_token(token)?;
        ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("토큰 주체가 올바르지 않습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let tokens = TokenService::with_secret("test-secret");
        let user_id = ObjectId::new();

        let (token, claims) = tokens.sign(&user_id).unwrap();
        assert_eq!(claims.sub, user_id.to_hex());
        assert_eq!(claims.exp - claims.iat, 3600);

        let decoded = tokens.verify_token(&token).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(tokens.extract_user_id(&token).unwrap(), user_id);
    }

    #[test]
    fn test_missing_secret_fails_issuance() {
        let tokens = TokenService::new(None, Duration::hours(1));
        let err = tokens.sign(&ObjectId::new()).unwrap_err();
        assert!(matches!(err, AppError::TokenIssuanceError(_)));

        let blank = TokenService::new(Some(String::new()), Duration::hours(1));
        assert!(matches!(blank.sign(&ObjectId::new()), Err(AppError::TokenIssuanceError(_))));
    }

    #[test]
    fn test_tampered_or_foreign_token_rejected() {
        let tokens = TokenService::with_secret("test-secret");
        let other = TokenService::with_secret("other-secret");
        let (token, _) = tokens.sign(&ObjectId::new()).unwrap();

        assert!(matches!(other.verify_token(&token), Err(AppError::AuthenticationError(_))));
        assert!(matches!(tokens.verify_token("not.a.token"), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = TokenService::new(Some("test-secret".to_string()), Duration::hours(-2));
        let (token, _) = expired.sign(&ObjectId::new()).unwrap();

        let err = expired.verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(msg) if msg.contains("만료")));
    }
}
