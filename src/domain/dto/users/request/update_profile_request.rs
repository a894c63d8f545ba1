//! 프로필 수정 요청 DTO
//!
//! 모든 필드는 선택 사항이며, 빠진 필드는 변경하지 않습니다.
//! `password`가 있을 때만 비밀번호 해시가 다시 계산됩니다.
//!
//! `birthdate`와 `coordinates`는 세 가지 상태를 구분합니다.
//!
//! | JSON                      | 값              | 동작   |
//! |---------------------------|-----------------|--------|
//! | 필드 없음                 | `None`          | 유지   |
//! | `"coordinates": null`     | `Some(None)`    | 삭제   |
//! | `"coordinates": [2, 48]`  | `Some(Some(_))` | 변경   |
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "소개는 1000자 이하여야 합니다"))]
    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<Option<NaiveDate>>,

    /// `[경도, 위도, 고도?]`
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Option<Vec<f64>>>,

    /// 이미지 카탈로그 ID 목록 (전체 교체)
    #[serde(default)]
    pub images: Option<Vec<String>>,

    /// 새 평문 비밀번호
    #[validate(length(min = 6, max = 128, message = "비밀번호는 6-128자 사이여야 합니다"))]
    #[serde(default)]
    pub password: Option<String>,
}

/// 필드가 존재하면 `null`이어도 `Some`으로 감쌉니다.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
