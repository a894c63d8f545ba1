//! # 자격 증명 관리 서비스
//!
//! 비밀번호 해싱/검증과 토큰 발급을 하나로 묶은 서비스입니다.
//!
//! ## 토큰 발급 흐름
//!
//! ```text
//! issue_token(user_id)
//!     │
//!     ├─ 1. 레코드 조회 (없으면 NotFound)
//!     ├─ 2. JWT 서명 (sub = user_id, exp = now + ttl)
//!     ├─ 3. record.token 덮어쓰기
//!     └─ 4. 레코드 전체 저장 (save)
//! ```
//!
//! 서명이 실패하면 레코드는 저장되지 않습니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{dto::users::response::LoginResponse, entities::users::User},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::{PasswordService, TokenService},
    utils::string_utils::normalize_email,
};

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 자격 증명 관리 서비스
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    passwords: PasswordService,
    tokens: TokenService,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, passwords: PasswordService, tokens: TokenService) -> Self {
        Self { store, passwords, tokens }
    }

    pub fn hash_password(&self, plaintext: &str) -> AppResult<String> {
        self.passwords.hash_password(plaintext)
    }

    pub fn verify_password(&self, plaintext: &str, password_hash: &str) -> bool {
        self.passwords.verify_password(plaintext, password_hash)
    }

    /// 사용자 ID로 레코드를 조회해 새 토큰을 발급하고 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::TokenIssuanceError` - 서명 실패
    /// * `AppError::PersistenceError` - 저장 실패
    pub async fn issue_token(&self, user_id: &ObjectId) -> AppResult<String> {
        let mut user = self.store.find_by_id(user_id).await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        self.issue_token_for(&mut user).await
    }

    /// 이미 로드한 레코드에 새 토큰을 발급하고 저장합니다.
    ///
    /// 저장이 실패하면 `user.token`은 호출 전 값으로 되돌립니다.
    pub async fn issue_token_for(&self, user: &mut User) -> AppResult<String> {
        let (token, claims) = self.tokens.sign(&user.id)?;

        let previous = user.token.replace(token.clone());
        if let Err(e) = self.store.save(user).await {
            user.token = previous;
            return Err(e);
        }

        log::info!("토큰 발급: user={} exp={}", claims.sub, claims.exp);
        Ok(token)
    }

    /// 이메일/비밀번호 인증
    ///
    /// 알 수 없는 이메일과 틀린 비밀번호는 같은 메시지의 `AuthenticationError`로 응답합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email)
            .map_err(|_| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let Some(user) = self.store.find_by_email(&email).await? else {
            log::warn!("로그인 실패: 알 수 없는 이메일");
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self.passwords.verify_password(password, user.password_hash()) {
            log::warn!("로그인 실패: user={}", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// 인증 후 토큰을 발급하고 로그인 응답을 만듭니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let mut user = self.authenticate(email, password).await?;
        let token = self.issue_token_for(&mut user).await?;

        log::info!("로그인 성공: user={}", user.id);
        Ok(LoginResponse::new(&user, token, self.tokens.ttl_seconds()))
    }
}
