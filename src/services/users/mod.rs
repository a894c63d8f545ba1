//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 생명주기와 탐색 기능을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 사용자 등록 및 프로필 수정 ([`UserService`])
//! - 관심사 목록 관리 ([`InterestService`])
//! - 나이 범위/근접 검색 ([`DiscoveryService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(store.clone(), PasswordService::from_env());
//! let response = user_service.register(CreateUserRequest::new("a@example.com", "abc123")).await?;
//! ```

pub mod user_service;
pub mod interest_service;
pub mod discovery_service;

pub use user_service::*;
pub use interest_service::*;
pub use discovery_service::*;
