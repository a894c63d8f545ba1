//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱, JWT 토큰 발급/검증, 로그인 흐름을 담당하는 서비스들을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 솔트 해시 (기본 cost 10)
//! - HMAC-SHA256 토큰 서명
//! - 외부 공개 응답에서 자격 증명 필드 제거
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{CredentialService, PasswordService, TokenService};
//!
//! let credentials = CredentialService::new(store, PasswordService::from_env(), TokenService::from_env());
//! let token = credentials.issue_token(&user_id).await?;
//! ```

pub mod password_service;
pub mod token_service;
pub mod credential_service;

pub use password_service::*;
pub use token_service::*;
pub use credential_service::*;
