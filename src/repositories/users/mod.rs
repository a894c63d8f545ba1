//! 사용자 데이터 액세스 계층
//!
//! - [`user_store::UserStore`] - 영속화 포트
//! - [`user_repo::MongoUserRepository`] - MongoDB 어댑터
//! - [`memory_repo::InMemoryUserRepository`] - 인메모리 어댑터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let user_repo = MongoUserRepository::new(database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::{NearbyUserStream, UserStore, UserStream};
pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;
