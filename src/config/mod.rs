//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - MongoDB 연결, bcrypt cost 설정
//! - [`auth_config`] - JWT 서명 비밀키, 토큰 만료 시간 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_profile_dev"
//!
//! # 보안
//! export BCRYPT_COST="10"             # 4-31 범위
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! ```
//!
//! 바이너리는 시작 시 `.env` 파일을 읽어 위 값을 채웁니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
