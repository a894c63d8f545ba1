//! 도메인 파생 모델
//!
//! - [`token`] - JWT 클레임
//! - [`discovery`] - 근접 검색 결과 투영

pub mod token;
pub mod discovery;

pub use token::*;
pub use discovery::*;
