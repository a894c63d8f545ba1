//! User Entity Implementation
//!
//! 위치 기반 매칭 서비스의 사용자 레코드입니다.
//! 자격 증명, 프로필 속성, 관심사 목록, 위치를 하나의 집합체로 보관합니다.
//!
//! 자격 증명 필드(`password_hash`, `token`)와 관심사 목록은 크레이트 내부의
//! 서비스를 통해서만 변경됩니다. 외부 공개용 직렬화는
//! [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 사용합니다.

use std::collections::HashSet;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::location::GeoPoint;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::is_normalized_email;

/// 사용자당 최대 관심사 개수
pub const MAX_INTERESTS: usize = 5;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 생성 시 할당되는 고유 ID (불변)
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이메일 (unique, 소문자/trim 정규화)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub(crate) password_hash: String,
    /// 가장 최근 발급된 인증 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 생년월일 (`YYYY-MM-DD` 문자열로 저장되어 사전순 비교가 날짜순과 일치)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    /// GeoJSON 위치 (2dsphere 인덱스 대상)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// 마지막 활동 시간
    pub last_activity: DateTime,
    /// 관심사 ID 목록 (중복 없음, 최대 5개, 삽입 순서 유지)
    #[serde(default)]
    pub(crate) interests: Vec<String>,
    /// 이미지 ID 목록
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// 생성 시간 (불변)
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일은 호출 전에 정규화되어 있어야 하고, 비밀번호는 이미 해시된 값이어야 합니다.
    pub fn new(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            email,
            password_hash,
            token: None,
            name: None,
            bio: None,
            birthdate: None,
            location: None,
            last_activity: now,
            interests: Vec::new(),
            images: Vec::new(),
            is_admin: false,
            created_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn has_interest(&self, interest_id: &str) -> bool {
        self.interests.iter().any(|i| i == interest_id)
    }

    /// 위치 설정
    ///
    /// 좌표를 먼저 검증하므로 실패 시 레코드는 변경되지 않습니다.
    /// `None`이면 위치를 제거합니다.
    pub fn set_location(&mut self, coordinates: Option<Vec<f64>>) -> AppResult<()> {
        self.location = match coordinates {
            Some(coordinates) => Some(GeoPoint::new(coordinates)?),
            None => None,
        };
        Ok(())
    }

    /// 관심사 추가
    ///
    /// 중복 검사가 개수 검사보다 먼저 수행됩니다. 실패 시 목록은 변경되지 않습니다.
    pub(crate) fn add_interest(&mut self, interest_id: &str) -> AppResult<()> {
        if self.has_interest(interest_id) {
            return Err(AppError::DuplicateInterest(interest_id.to_string()));
        }
        if self.interests.len() >= MAX_INTERESTS {
            return Err(AppError::InterestLimitExceeded { limit: MAX_INTERESTS });
        }
        self.interests.push(interest_id.to_string());
        Ok(())
    }

    /// 값이 같은 관심사를 모두 제거합니다. 없으면 아무 일도 일어나지 않습니다.
    pub(crate) fn remove_interest(&mut self, interest_id: &str) {
        self.interests.retain(|i| i != interest_id);
    }

    /// 영속화 직전 불변식 검사
    ///
    /// 1. 이메일 정규화 여부
    /// 2. 비밀번호 해시 존재
    /// 3. 좌표 범위
    /// 4. 관심사 중복/개수
    pub fn validate(&self) -> AppResult<()> {
        if !is_normalized_email(&self.email) {
            return Err(AppError::ValidationError(
                "이메일은 소문자로 정규화되어야 합니다".to_string(),
            ));
        }

        if self.password_hash.is_empty() {
            return Err(AppError::ValidationError("비밀번호 해시가 없습니다".to_string()));
        }

        if let Some(location) = &self.location {
            location.validate()?;
        }

        if self.interests.len() > MAX_INTERESTS {
            return Err(AppError::InterestLimitExceeded { limit: MAX_INTERESTS });
        }

        let mut seen = HashSet::with_capacity(self.interests.len());
        if let Some(dup) = self.interests.iter().find(|i| !seen.insert(i.as_str())) {
            return Err(AppError::DuplicateInterest(dup.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::location::GeoJsonType;

    fn sample_user() -> User {
        User::new("alice@example.com".to_string(), "$2b$04$hash".to_string())
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();

        assert!(!user.is_admin);
        assert!(user.token().is_none());
        assert!(user.interests().is_empty());
        assert_eq!(user.last_activity, user.created_at);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_add_interest_preserves_order() {
        let mut user = sample_user();
        user.add_interest("b").unwrap();
        user.add_interest("a").unwrap();

        assert_eq!(user.interests(), ["b", "a"]);
    }

    #[test]
    fn test_add_interest_duplicate_leaves_list_unchanged() {
        let mut user = sample_user();
        user.add_interest("a").unwrap();

        let err = user.add_interest("a").unwrap_err();
        assert!(matches!(err, AppError::DuplicateInterest(id) if id == "a"));
        assert_eq!(user.interests(), ["a"]);
    }

    #[test]
    fn test_add_interest_over_limit_leaves_list_unchanged() {
        let mut user = sample_user();
        for id in ["1", "2", "3", "4", "5"] {
            user.add_interest(id).unwrap();
        }

        let err = user.add_interest("6").unwrap_err();
        assert!(matches!(err, AppError::InterestLimitExceeded { limit: 5 }));
        assert_eq!(user.interests(), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_add_existing_interest_on_full_list_is_duplicate() {
        let mut user = sample_user();
        for id in ["1", "2", "3", "4", "5"] {
            user.add_interest(id).unwrap();
        }

        assert!(matches!(user.add_interest("3"), Err(AppError::DuplicateInterest(_))));
    }

    #[test]
    fn test_remove_missing_interest_is_noop() {
        let mut user = sample_user();
        user.add_interest("a").unwrap();
        user.remove_interest("zzz");

        assert_eq!(user.interests(), ["a"]);
    }

    #[test]
    fn test_set_location_failure_keeps_previous_value() {
        let mut user = sample_user();
        user.set_location(Some(vec![2.35, 48.85])).unwrap();

        assert!(user.set_location(Some(vec![200.0, 10.0])).is_err());
        assert_eq!(user.location.as_ref().unwrap().coordinates, vec![2.35, 48.85]);
    }

    #[test]
    fn test_validate_rejects_bad_state() {
        let mut user = sample_user();
        user.email = "Alice@Example.com".to_string();
        assert!(matches!(user.validate(), Err(AppError::ValidationError(_))));

        let mut user = sample_user();
        user.interests = vec!["a".into(), "a".into()];
        assert!(matches!(user.validate(), Err(AppError::DuplicateInterest(_))));

        let mut user = sample_user();
        user.location = Some(GeoPoint { kind: GeoJsonType::Point, coordinates: vec![0.0, 95.0] });
        assert!(matches!(user.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_bson_layout_uses_underscore_id() {
        let user = sample_user();
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("password_hash"));
        assert!(!doc.contains_key("token"));
        assert!(!doc.contains_key("location"));
    }
}
