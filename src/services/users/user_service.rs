//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생성과 프로필 변경을 담당합니다.
//!
//! ## 쓰기 파이프라인
//!
//! ```text
//! 정규화 (이메일 소문자/trim, 선택 문자열 trim)
//!     │
//!     ▼
//! 요청 DTO 검증 (validator)
//!     │
//!     ▼
//! 좌표 검증 (GeoPoint::new) ──── 실패 시 ValidationError, 저장 없음
//!     │
//!     ▼
//! 비밀번호 해싱 (비밀번호가 바뀔 때만)
//!     │
//!     ▼
//! 레코드 불변식 검사 (User::validate)
//!     │
//!     ▼
//! 레코드 전체 저장 (insert / save)
//! ```
//!
//! 비밀번호 해싱은 숨겨진 저장 훅이 아니라 각 쓰기 경로의 명시적 단계입니다.
//! 비밀번호를 바꾸지 않는 저장에서는 해시를 다시 계산하지 않습니다.

use std::sync::Arc;
use mongodb::bson::{oid::ObjectId, DateTime};
use validator::Validate;
use crate::{
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateProfileRequest},
            response::UserResponse,
        },
        entities::users::{GeoPoint, User},
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::PasswordService,
    utils::string_utils::{clean_optional_string, normalize_email},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let users = UserService::new(store.clone(), PasswordService::from_env());
///
/// let created = users.register(CreateUserRequest::new("john@example.com", "abc123")).await?;
/// let updated = users.update_profile(&id, UpdateProfileRequest {
///     coordinates: Some(Some(vec![2.35, 48.85])),
///     ..Default::default()
/// }).await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    passwords: PasswordService,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, passwords: PasswordService) -> Self {
        Self { store, passwords }
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 또는 좌표 검증 실패
    /// * `AppError::PersistenceError` - 이메일 중복 등 저장소 에러
    pub async fn register(&self, mut request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        request.email = normalize_email(&request.email)?;
        request.validate()?;
        let location = request.coordinates.map(GeoPoint::new).transpose()?;

        let password_hash = self.passwords.hash_password(&request.password)?;

        let mut user = User::new(request.email, password_hash);
        user.name = clean_optional_string(request.name);
        user.bio = clean_optional_string(request.bio);
        user.birthdate = request.birthdate;
        user.location = location;
        user.validate()?;

        self.store.insert(&user).await?;

        log::info!("사용자 등록: user={} took={:?}", user.id, start_time.elapsed());
        Ok(UserResponse::from(user))
    }

    /// 프로필 부분 수정
    ///
    /// `None`인 필드는 그대로 두고, 빈 문자열은 해당 필드를 지웁니다.
    /// `birthdate`/`coordinates`는 `Some(None)`이면 지웁니다.
    /// 좌표 검증이 실패하면 아무것도 저장되지 않습니다.
    pub async fn update_profile(&self, user_id: &ObjectId, request: UpdateProfileRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let mut user = self.load(user_id).await?;

        if let Some(coordinates) = request.coordinates {
            user.set_location(coordinates)?;
        }
        if let Some(name) = request.name {
            user.name = clean_optional_string(Some(name));
        }
        if let Some(bio) = request.bio {
            user.bio = clean_optional_string(Some(bio));
        }
        if let Some(birthdate) = request.birthdate {
            user.birthdate = birthdate;
        }
        if let Some(images) = request.images {
            user.images = images;
        }
        if let Some(password) = request.password.as_deref() {
            user.password_hash = self.passwords.hash_password(password)?;
            log::info!("비밀번호 변경: user={}", user.id);
        }

        user.validate()?;
        self.store.save(&user).await?;

        log::debug!("프로필 수정: user={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// ID로 사용자 조회 (자격 증명 제외)
    pub async fn get_user(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        self.load(user_id).await.map(UserResponse::from)
    }

    /// 이메일로 사용자 조회 (자격 증명 제외)
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<UserResponse> {
        let email = normalize_email(email)?;
        self.store.find_by_email(&email).await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 마지막 활동 시간을 현재로 갱신
    pub async fn touch_activity(&self, user_id: &ObjectId) -> AppResult<DateTime> {
        let mut user = self.load(user_id).await?;
        user.last_activity = DateTime::now();
        self.store.save(&user).await?;

        Ok(user.last_activity)
    }

    async fn load(&self, user_id: &ObjectId) -> AppResult<User> {
        self.store.find_by_id(user_id).await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> (Arc<InMemoryUserRepository>, UserService) {
        let store = Arc::new(InMemoryUserRepository::new());
        (store.clone(), UserService::new(store, PasswordService::new(4)))
    }

    fn object_id(response: &UserResponse) -> ObjectId {
        ObjectId::parse_str(&response.id).unwrap()
    }

    #[tokio::test]
    async fn test_register_hashes_and_normalizes() {
        let (store, users) = service();
        let mut request = CreateUserRequest::new("  Alice@Example.com ", "abc123");
        request.name = Some("  Alice ".to_string());
        request.coordinates = Some(vec![2.35, 48.85]);

        let created = users.register(request).await.unwrap();
        assert_eq!(created.email, "alice@example.com");
        assert_eq!(created.name.as_deref(), Some("Alice"));

        let stored = store.find_by_id(&object_id(&created)).await.unwrap().unwrap();
        assert_ne!(stored.password_hash(), "abc123");
        assert!(PasswordService::new(4).verify_password("abc123", stored.password_hash()));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_coordinates_before_persisting() {
        let (store, users) = service();
        let mut request = CreateUserRequest::new("alice@example.com", "abc123");
        request.coordinates = Some(vec![200.0, 10.0]);

        let err = users.register(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_short_password_and_duplicate_email() {
        let (_, users) = service();

        let short = users.register(CreateUserRequest::new("a@example.com", "abc")).await;
        assert!(matches!(short, Err(AppError::ValidationError(_))));

        users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let duplicate = users.register(CreateUserRequest::new("A@example.com", "abc123")).await;
        assert!(matches!(duplicate, Err(AppError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let (store, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let id = object_id(&created);
        let before = store.find_by_id(&id).await.unwrap().unwrap().password_hash().to_string();

        let updated = users.update_profile(&id, UpdateProfileRequest {
            bio: Some("hello".to_string()),
            birthdate: Some(NaiveDate::from_ymd_opt(1995, 3, 14)),
            ..Default::default()
        }).await.unwrap();

        assert_eq!(updated.bio.as_deref(), Some("hello"));
        let after = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(after.password_hash(), before);
    }

    #[tokio::test]
    async fn test_update_with_password_rehashes() {
        let (store, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let id = object_id(&created);

        users.update_profile(&id, UpdateProfileRequest {
            password: Some("new-secret".to_string()),
            ..Default::default()
        }).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        let passwords = PasswordService::new(4);
        assert!(passwords.verify_password("new-secret", stored.password_hash()));
        assert!(!passwords.verify_password("abc123", stored.password_hash()));
    }

    #[tokio::test]
    async fn test_invalid_location_update_changes_nothing() {
        let (store, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let id = object_id(&created);

        let err = users.update_profile(&id, UpdateProfileRequest {
            name: Some("Renamed".to_string()),
            coordinates: Some(Some(vec![10.0])),
            ..Default::default()
        }).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert!(stored.name.is_none());
        assert!(stored.location.is_none());
    }

    #[tokio::test]
    async fn test_update_sets_then_clears_location_and_birthdate() {
        let (store, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let id = object_id(&created);

        let updated = users.update_profile(&id, UpdateProfileRequest {
            coordinates: Some(Some(vec![2.35, 48.85])),
            birthdate: Some(NaiveDate::from_ymd_opt(1995, 3, 14)),
            ..Default::default()
        }).await.unwrap();
        assert_eq!(updated.location.map(|l| l.coordinates), Some(vec![2.35, 48.85]));

        users.update_profile(&id, UpdateProfileRequest {
            name: Some("Alice".to_string()),
            ..Default::default()
        }).await.unwrap();
        let untouched = store.find_by_id(&id).await.unwrap().unwrap();
        assert!(untouched.location.is_some());
        assert!(untouched.birthdate.is_some());

        let cleared = users.update_profile(&id, UpdateProfileRequest {
            coordinates: Some(None),
            birthdate: Some(None),
            ..Default::default()
        }).await.unwrap();
        assert!(cleared.location.is_none());
        assert!(cleared.birthdate.is_none());

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert!(stored.location.is_none());
        assert!(stored.birthdate.is_none());
        assert_eq!(stored.name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_touch_activity_advances_timestamp() {
        let (store, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();
        let id = object_id(&created);

        let touched = users.touch_activity(&id).await.unwrap();
        assert!(touched >= created.last_activity);

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.last_activity, touched);
        assert_eq!(stored.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let (_, users) = service();
        let created = users.register(CreateUserRequest::new("a@example.com", "abc123")).await.unwrap();

        let found = users.get_user_by_email(" A@EXAMPLE.COM").await.unwrap();
        assert_eq!(found.id, created.id);
        assert!(matches!(users.get_user(&ObjectId::new()).await, Err(AppError::NotFound(_))));
    }
}
