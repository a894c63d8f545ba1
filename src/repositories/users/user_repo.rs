//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! [`UserStore`] 포트의 운영 어댑터입니다.
//!
//! ## 특징
//!
//! - **쓰기 전 검증**: `insert`/`save`는 [`User::validate`]를 통과한 레코드만 기록
//! - **원자적 쓰기**: 모든 변경은 `replace_one` 한 번으로 레코드 전체를 교체
//! - **구면 근접 검색**: `$geoNear` (`spherical: true`) 집계 파이프라인
//! - **인덱스 관리**: email(unique), location(2dsphere), birthdate

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::{StreamExt, TryStreamExt};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{
        entities::users::{GeoPoint, User},
        models::discovery::NearbyUser,
    },
    errors::{AppError, AppResult},
    repositories::users::user_store::{NearbyUserStream, UserStore, UserStream},
};

/// 사용자 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// ## L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), location(2dsphere), birthdate(asc)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(Arc::new(Database::new().await?));
/// repo.create_indexes().await?;
///
/// let found = repo.find_by_email("john@example.com").await?;
/// ```
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지 및 로그인 조회
    /// 2. **location 2dsphere 인덱스** - `$geoNear` 구면 근접 검색에 필수
    /// 3. **birthdate 인덱스** - 나이 범위 검색
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 이메일이 있는 컬렉션에서는 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let location_index = IndexModel::builder()
            .keys(doc! { "location": "2dsphere" })
            .options(IndexOptions::builder()
                .name("location_2dsphere".to_string())
                .build())
            .build();

        let birthdate_index = IndexModel::builder()
            .keys(doc! { "birthdate": 1 })
            .options(IndexOptions::builder()
                .name("birthdate_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, location_index, birthdate_index])
            .await?;

        log::info!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

/// `$geoNear` 집계 파이프라인
///
/// `$geoNear`는 반드시 첫 단계여야 하며, 결과는 거리 오름차순으로 나옵니다.
pub(crate) fn geo_near_pipeline(origin: &GeoPoint, max_distance_meters: f64) -> Vec<Document> {
    vec![
        doc! {
            "$geoNear": {
                "near": {
                    "type": "Point",
                    "coordinates": [origin.longitude(), origin.latitude()],
                },
                "key": "location",
                "distanceField": "distance",
                "maxDistance": max_distance_meters,
                "spherical": true,
            }
        },
        doc! {
            "$project": {
                "_id": 1,
                "email": 1,
                "name": 1,
                "birthdate": 1,
                "distance": 1,
            }
        },
    ]
}

/// 생년월일 범위 필터 (`YYYY-MM-DD` 문자열 비교)
pub(crate) fn birthdate_range_filter(min: NaiveDate, max: NaiveDate) -> Document {
    doc! {
        "birthdate": {
            "$gte": min.format("%Y-%m-%d").to_string(),
            "$lte": max.format("%Y-%m-%d").to_string(),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, user: &User) -> AppResult<()> {
        user.validate()?;
        self.collection().insert_one(user).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let user = self.collection()
            .find_one(doc! { "_id": *id })
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection()
            .find_one(doc! { "email": email })
            .await?;
        Ok(user)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        user.validate()?;
        let result = self.collection()
            .replace_one(doc! { "_id": user.id }, user)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    async fn find_by_birthdate_range(&self, min: NaiveDate, max: NaiveDate) -> AppResult<UserStream> {
        let cursor = self.collection()
            .find(birthdate_range_filter(min, max))
            .await?;

        Ok(cursor.map_err(AppError::from).boxed())
    }

    async fn find_near(&self, origin: &GeoPoint, max_distance_meters: f64) -> AppResult<NearbyUserStream> {
        let cursor = self.collection()
            .aggregate(geo_near_pipeline(origin, max_distance_meters))
            .await?;

        let stream = cursor
            .map_err(AppError::from)
            .and_then(|document| async move {
                mongodb::bson::from_document::<NearbyUser>(document)
                    .map_err(|e| AppError::PersistenceError(e.to_string()))
            });

        Ok(stream.boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_near_is_first_stage_and_spherical() {
        let origin = GeoPoint::new(vec![2.35, 48.85]).unwrap();
        let pipeline = geo_near_pipeline(&origin, 10_000.0);

        let geo_near = pipeline[0].get_document("$geoNear").unwrap();
        assert!(geo_near.get_bool("spherical").unwrap());
        assert_eq!(geo_near.get_f64("maxDistance").unwrap(), 10_000.0);
        assert_eq!(geo_near.get_str("distanceField").unwrap(), "distance");

        let project = pipeline[1].get_document("$project").unwrap();
        assert!(!project.contains_key("password_hash"));
        assert!(!project.contains_key("token"));
        assert!(project.contains_key("distance"));
    }

    #[test]
    fn test_birthdate_filter_is_inclusive() {
        let min = NaiveDate::from_ymd_opt(1993, 6, 15).unwrap();
        let max = NaiveDate::from_ymd_opt(1999, 6, 15).unwrap();
        let filter = birthdate_range_filter(min, max);

        let range = filter.get_document("birthdate").unwrap();
        assert_eq!(range.get_str("$gte").unwrap(), "1993-06-15");
        assert_eq!(range.get_str("$lte").unwrap(), "1999-06-15");
    }
}
