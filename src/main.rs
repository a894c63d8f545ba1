//! 사용자 프로필 코어 부트스트랩
//!
//! 설정을 읽고 MongoDB 연결과 `users` 컬렉션 인덱스를 준비한 뒤 종료합니다.
//! 배포 파이프라인에서 마이그레이션 단계로 실행합니다.

use std::sync::Arc;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_profile_core::config::{JwtConfig, PasswordConfig};
use user_profile_core::db::Database;
use user_profile_core::errors::AppResult;
use user_profile_core::repositories::users::MongoUserRepository;

#[tokio::main]
async fn main() -> AppResult<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 프로필 코어 부트스트랩 시작...");
    log_security_settings();

    let database = match Database::new().await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("데이터베이스 연결 실패: {}", e);
            return Err(e);
        }
    };

    MongoUserRepository::new(database.clone()).create_indexes().await?;

    info!("✅ 부트스트랩 완료: database={}", database.database_name());
    Ok(())
}

/// 환경 설정 파일을 로드합니다
///
/// `PROFILE` 환경 변수에 따라 `.env.prod`, `.env.dev`, `.env` 중 하나를 읽습니다.
/// 파일이 없어도 이미 설정된 환경 변수로 계속 진행합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv(),
    };

    if let Err(e) = loaded {
        eprintln!("환경 설정 파일을 읽지 못했습니다 (profile={:?}): {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

fn log_security_settings() {
    info!("bcrypt cost: {}", PasswordConfig::bcrypt_cost());
    info!("토큰 만료 시간: {}분", JwtConfig::expiration_minutes());

    if JwtConfig::secret().is_none() {
        warn!("JWT_SECRET이 없어 토큰 발급이 실패합니다");
    }
}
