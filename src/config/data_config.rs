//! 데이터 및 보안 설정 관리 모듈
//!
//! 데이터베이스 연결과 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// bcrypt 기본 cost
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: 기본값 `mongodb://localhost:27017`
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_NAME`: 기본값 `user_profile_dev`
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_profile_dev".to_string())
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 환경 변수 `BCRYPT_COST`에서 bcrypt cost를 읽습니다.
    ///
    /// 값이 없거나 4-31 범위를 벗어나면 [`DEFAULT_BCRYPT_COST`]를 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok().as_deref())
    }

    /// 문자열 설정값을 bcrypt cost로 해석합니다.
    pub fn bcrypt_cost_from(raw: Option<&str>) -> u32 {
        match raw.and_then(|s| s.trim().parse::<u32>().ok()) {
            Some(cost) if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) => cost,
            Some(cost) => {
                log::warn!("BCRYPT_COST={} is out of range, falling back to {}", cost, DEFAULT_BCRYPT_COST);
                DEFAULT_BCRYPT_COST
            }
            None => DEFAULT_BCRYPT_COST,
        }
    }
}
