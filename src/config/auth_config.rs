//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 관련된 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! ```
//!
//! 서명 비밀키는 외부 설정 제공자가 주입하는 값으로 취급합니다.
//! 기본값을 두지 않으며, 비어 있으면 토큰 발급이 `TokenIssuanceError`로 실패합니다.

use std::env;

/// 토큰 기본 만료 시간 (분)
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// `JWT_SECRET`이 없거나 공백뿐이면 `None`을 반환합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Option<String> {
        let secret = env::var("JWT_SECRET").ok().filter(|s| !s.trim().is_empty());
        if secret.is_none() {
            log::warn!("JWT_SECRET not set, token issuance will fail");
        }
        secret
    }

    /// 토큰 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 60분 (1시간)
    pub fn expiration_minutes() -> i64 {
        Self::expiration_minutes_from(env::var("JWT_EXPIRATION_MINUTES").ok().as_deref())
    }

    /// 문자열 설정값을 만료 시간(분)으로 해석합니다. 0 이하는 기본값으로 대체됩니다.
    pub fn expiration_minutes_from(raw: Option<&str>) -> i64 {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES)
    }
}
