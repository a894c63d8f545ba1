//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티와 값 객체를 정의합니다.
//!
//! - [`user::User`] - 사용자 레코드 (집합체 루트)
//! - [`location::GeoPoint`] - GeoJSON 위치 값 객체
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let mut user = User::new("user@example.com".to_string(), hashed_password);
//! user.set_location(Some(vec![2.35, 48.85]))?;
//! ```

pub mod user;
pub mod location;

pub use user::{User, MAX_INTERESTS};
pub use location::{GeoJsonType, GeoPoint};
