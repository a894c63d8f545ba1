//! 사용자 영속화 포트
//!
//! 코어가 저장소에 요구하는 최소 계약입니다.
//!
//! - 레코드 단위의 원자적 전체 쓰기 ([`UserStore::save`])
//! - 동등 조회 (ID, 이메일)
//! - 날짜 필드 범위 조회 ([`UserStore::find_by_birthdate_range`])
//! - 지리 좌표에 대한 구면 최근접 조회 ([`UserStore::find_near`])
//!
//! 조회 결과는 스트림으로 반환됩니다. 호출할 때마다 쿼리를 새로 실행하며
//! 결과를 캐시하지 않습니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::stream::BoxStream;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::{GeoPoint, User};
use crate::domain::models::discovery::NearbyUser;
use crate::errors::AppResult;

/// 사용자 레코드 스트림
pub type UserStream = BoxStream<'static, AppResult<User>>;

/// 근접 검색 결과 스트림 (거리 오름차순)
pub type NearbyUserStream = BoxStream<'static, AppResult<NearbyUser>>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 레코드 저장. 이메일 중복은 `PersistenceError`로 올라옵니다.
    ///
    /// 구현체는 기록 전에 [`User::validate`]를 호출해야 합니다.
    async fn insert(&self, user: &User) -> AppResult<()>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 정규화된 이메일로 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 기존 레코드를 통째로 교체합니다 (마지막 쓰기 우선).
    ///
    /// 레코드가 없으면 `NotFound`를 반환합니다. `insert`와 같이 기록 전에 검증합니다.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// `min <= birthdate <= max` 인 레코드 (양 끝 포함)
    async fn find_by_birthdate_range(&self, min: NaiveDate, max: NaiveDate) -> AppResult<UserStream>;

    /// `origin`에서 `max_distance_meters` 이내인 레코드를 가까운 순으로 반환합니다.
    ///
    /// 위치가 없는 레코드는 제외됩니다.
    async fn find_near(&self, origin: &GeoPoint, max_distance_meters: f64) -> AppResult<NearbyUserStream>;
}
