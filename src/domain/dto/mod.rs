//! 데이터 전송 객체 (DTO)
//!
//! 외부 계층과 주고받는 요청/응답 구조체입니다.
//! 응답 DTO는 자격 증명 필드를 절대 포함하지 않습니다.

pub mod users;

pub use users::*;
