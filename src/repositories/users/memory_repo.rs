//! # 인메모리 사용자 리포지토리
//!
//! [`UserStore`] 포트의 임베디드/테스트용 어댑터입니다.
//! MongoDB 어댑터와 같은 의미를 따릅니다.
//!
//! - 레코드 불변식 위반 → 저장 전에 `User::validate` 에러
//! - 이메일 중복 → `PersistenceError`
//! - 없는 레코드 저장 → `NotFound`
//! - 근접 검색은 2dsphere와 같은 반지름의 구면 haversine 거리, 오름차순

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::{stream, StreamExt};
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{
        entities::users::{GeoPoint, User},
        models::discovery::NearbyUser,
    },
    errors::{AppError, AppResult},
    repositories::users::user_store::{NearbyUserStream, UserStore, UserStream},
    utils::geo_utils::great_circle_distance,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::PersistenceError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::PersistenceError("user store lock poisoned".to_string()))
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::PersistenceError(format!("E11000 duplicate key error: email \"{}\"", email))
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> AppResult<()> {
        user.validate()?;
        let mut users = self.write()?;

        if users.contains_key(&user.id) {
            return Err(AppError::PersistenceError(format!(
                "E11000 duplicate key error: _id {}",
                user.id
            )));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.values().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        user.validate()?;
        let mut users = self.write()?;

        if !users.contains_key(&user.id) {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }
        if users.values().any(|u| u.id != user.id && u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_birthdate_range(&self, min: NaiveDate, max: NaiveDate) -> AppResult<UserStream> {
        let mut matched: Vec<User> = self
            .read()?
            .values()
            .filter(|u| u.birthdate.is_some_and(|b| min <= b && b <= max))
            .cloned()
            .collect();
        matched.sort_by_key(|u| u.id.bytes());

        Ok(stream::iter(matched.into_iter().map(Ok)).boxed())
    }

    async fn find_near(&self, origin: &GeoPoint, max_distance_meters: f64) -> AppResult<NearbyUserStream> {
        let mut matched: Vec<NearbyUser> = self
            .read()?
            .values()
            .filter_map(|u| {
                let location = u.location.as_ref()?;
                let distance = great_circle_distance(&origin.coordinates, &location.coordinates)?;
                (distance <= max_distance_meters).then(|| NearbyUser {
                    id: u.id,
                    email: u.email.clone(),
                    name: u.name.clone(),
                    birthdate: u.birthdate,
                    distance,
                })
            })
            .collect();
        matched.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.id.bytes().cmp(&b.id.bytes()))
        });

        Ok(stream::iter(matched.into_iter().map(Ok)).boxed())
    }
}
