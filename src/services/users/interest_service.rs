//! 관심사 목록 관리 서비스
//!
//! 관심사 목록은 이 서비스의 두 연산으로만 변경됩니다.
//! 각 연산은 레코드를 읽고, 메모리에서 변경한 뒤, 레코드 전체를 한 번에 저장합니다.
//! 같은 레코드에 대한 동시 변경은 마지막 쓰기가 이깁니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

pub struct InterestService {
    store: Arc<dyn UserStore>,
}

impl InterestService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 관심사 추가
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateInterest` - 이미 있는 관심사 (개수 검사보다 우선)
    /// * `AppError::InterestLimitExceeded` - 이미 5개
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn add_interest(&self, user_id: &ObjectId, interest_id: &str) -> AppResult<User> {
        let mut user = self.load(user_id).await?;

        user.add_interest(interest_id)?;
        user.validate()?;
        self.store.save(&user).await?;

        log::info!("관심사 추가: user={} interest={} count={}", user.id, interest_id, user.interests().len());
        Ok(user)
    }

    /// 관심사 제거 (멱등)
    ///
    /// 목록에 없는 ID여도 에러 없이 레코드를 저장합니다.
    pub async fn remove_interest(&self, user_id: &ObjectId, interest_id: &str) -> AppResult<User> {
        let mut user = self.load(user_id).await?;

        user.remove_interest(interest_id);
        self.store.save(&user).await?;

        log::info!("관심사 제거: user={} interest={} count={}", user.id, interest_id, user.interests().len());
        Ok(user)
    }

    async fn load(&self, user_id: &ObjectId) -> AppResult<User> {
        self.store.find_by_id(user_id).await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}
