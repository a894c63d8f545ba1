//! 위치 기반 매칭 서비스의 사용자 프로필 코어
//!
//! 사용자 레코드와 그 불변식을 지키는 연산들을 제공합니다.
//! HTTP 계층은 포함하지 않으며, 이 크레이트를 소비하는 API 서버가 담당합니다.
//!
//! # Features
//!
//! - **자격 증명**: bcrypt 비밀번호 해싱, HS256 JWT 발급/검증
//! - **관심사**: 중복 없는 최대 5개 목록
//! - **위치**: GeoJSON Point 좌표 검증
//! - **탐색**: 나이 범위 검색, 구면 거리 근접 검색
//! - **저장소**: MongoDB 어댑터와 인메모리 어댑터
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │           Services           │ ← 사용자/관심사/탐색/자격 증명
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │       UserStore (trait)      │ ← 영속화 포트
//! └──────────────────────────────┘
//!        │                │
//!        ▼                ▼
//! ┌─────────────┐  ┌─────────────┐
//! │   MongoDB   │  │  In-memory  │
//! └─────────────┘  └─────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_profile_core::repositories::users::{InMemoryUserRepository, UserStore};
//! use user_profile_core::services::auth::{CredentialService, PasswordService, TokenService};
//! use user_profile_core::services::users::UserService;
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let users = UserService::new(store.clone(), PasswordService::from_env());
//! let credentials = CredentialService::new(store, PasswordService::from_env(), TokenService::from_env());
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
