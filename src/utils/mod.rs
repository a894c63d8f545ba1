//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 정규화, 문자열 정리
//! - [`geo_utils`] - 좌표 검증, 구면 거리 계산

pub mod string_utils;
pub mod geo_utils;
