//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserStore`] 트레이트에만 의존하며,
//! 운영 환경에서는 MongoDB 어댑터를, 테스트와 임베디드 환경에서는 인메모리 어댑터를 주입합니다.

pub mod users;
