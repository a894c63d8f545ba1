//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 레코드 코어를 위한 통합 에러 타입입니다.
//! 모든 도메인 검증은 영속화 이전에 수행되며, 저장소 에러는 가공 없이
//! [`AppError::PersistenceError`]로 그대로 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn check_interest(interests: &[String], id: &str) -> Result<(), AppError> {
//!     if interests.iter().any(|i| i == id) {
//!         return Err(AppError::DuplicateInterest(id.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 외부 API 계층은 [`AppError::error_code`]를 사용해 응답 코드를 결정합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 좌표 등 제약이 있는 필드의 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 이미 등록된 관심사
    #[error("Duplicate interest: {0}")]
    DuplicateInterest(String),

    /// 관심사 목록이 가득 참
    #[error("Interest limit exceeded: at most {limit} interests allowed")]
    InterestLimitExceeded { limit: usize },

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 서명 실패 (비밀키 누락 등)
    #[error("Token issuance error: {0}")]
    TokenIssuanceError(String),

    /// 저장소에서 올라온 에러 (이메일 유니크 위반 등)
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// 리소스 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 오류 (해싱 실패 등)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 외부 계층에서 사용하는 안정적인 에러 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::DuplicateInterest(_) => "duplicate_interest",
            AppError::InterestLimitExceeded { .. } => "interest_limit_exceeded",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::TokenIssuanceError(_) => "token_issuance_error",
            AppError::PersistenceError(_) => "persistence_error",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::PersistenceError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::ValidationError("x".into()).error_code(), "validation_error");
        assert_eq!(AppError::DuplicateInterest("x".into()).error_code(), "duplicate_interest");
        assert_eq!(
            AppError::InterestLimitExceeded { limit: 5 }.error_code(),
            "interest_limit_exceeded"
        );
        assert_eq!(AppError::TokenIssuanceError("x".into()).error_code(), "token_issuance_error");
        assert_eq!(AppError::PersistenceError("x".into()).error_code(), "persistence_error");
    }

    #[test]
    fn test_interest_limit_message_mentions_limit() {
        let error = AppError::InterestLimitExceeded { limit: 5 };
        assert!(error.to_string().contains('5'));
    }

    #[test]
    fn test_validation_errors_convert() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("email", validator::ValidationError::new("email"));

        let app_error: AppError = errors.into();
        assert!(matches!(app_error, AppError::ValidationError(msg) if msg.contains("email")));
    }
}
