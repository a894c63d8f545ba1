//! 도메인 계층
//!
//! - [`entities`] - 영속화되는 사용자 레코드
//! - [`dto`] - 외부 계층과 주고받는 요청/응답 형태 (민감 정보 제외)
//! - [`models`] - 토큰 클레임, 근접 검색 결과 등 파생 모델

pub mod entities;
pub mod dto;
pub mod models;
