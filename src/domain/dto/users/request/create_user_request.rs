//! 사용자 등록 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 입력 데이터 구조를 정의합니다.
//! 필드 형식은 `validator`로, 좌표 범위는 서비스 계층의 좌표 검증기로 확인합니다.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "abc123",
///   "name": "Jane",
///   "birthdate": "1995-03-14",
///   "coordinates": [2.35, 48.85]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (저장 시 소문자/trim 정규화)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (저장 전 해시됨)
    #[validate(length(min = 6, max = 128, message = "비밀번호는 6-128자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "소개는 1000자 이하여야 합니다"))]
    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub birthdate: Option<NaiveDate>,

    /// `[경도, 위도, 고도?]`
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

impl CreateUserRequest {
    /// 이메일과 비밀번호만으로 요청 생성
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
            bio: None,
            birthdate: None,
            coordinates: None,
        }
    }
}
