//! 외부 공개용 사용자 응답 DTO
//!
//! 호출자의 권한과 무관하게 `password_hash`와 `token`은 항상 제외됩니다.
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{GeoPoint, User};
use crate::domain::models::discovery::NearbyUser;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub location: Option<GeoPoint>,
    pub last_activity: DateTime,
    pub interests: Vec<String>,
    pub images: Vec<String>,
    pub is_admin: bool,
    pub created_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            bio,
            birthdate,
            location,
            last_activity,
            interests,
            images,
            is_admin,
            created_at,
            ..
        } = user;

        Self {
            id: id.to_hex(),
            email,
            name,
            bio,
            birthdate,
            location,
            last_activity,
            interests,
            images,
            is_admin,
            created_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse::from(user.clone())
    }
}

/// 근접 검색 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyUserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    /// 미터 단위 거리
    pub distance: f64,
}

impl From<NearbyUser> for NearbyUserResponse {
    fn from(nearby: NearbyUser) -> Self {
        Self {
            id: nearby.id.to_hex(),
            email: nearby.email,
            name: nearby.name,
            birthdate: nearby.birthdate,
            distance: nearby.distance,
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(user: &User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
