//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 생성 시 [`UserStore`](crate::repositories::users::UserStore) 구현을 주입받습니다.
//! 각 변경 연산은 레코드를 읽고 검증한 뒤 한 번의 전체 쓰기로 끝납니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::CredentialService};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database));
//! let user_service = UserService::new(store.clone(), PasswordService::from_env());
//! ```

pub mod users;
pub mod auth;
