//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준 클레임만 포함합니다. 개인정보 보호를 위해 이메일 등은 넣지 않습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID, ObjectId 16진수 문자열)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
