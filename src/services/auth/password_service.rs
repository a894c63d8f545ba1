//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 단방향 솔트 해시를 제공합니다.
//! 해싱은 비밀번호가 바뀌는 쓰기 경로에서만, 영속화 직전에 명시적으로 호출해야 합니다.

use bcrypt::{hash, verify};
use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// 비밀번호 해싱/검증 서비스
///
/// ```rust,ignore
/// let passwords = PasswordService::from_env();
/// let hash = passwords.hash_password("abc123")?;
/// assert!(passwords.verify_password("abc123", &hash));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 환경 변수 기반 생성 (기본 cost 10)
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 해싱 실패
    pub fn hash_password(&self, plaintext: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();

        let password_hash = hash(plaintext, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing (cost {}) took: {:?}", self.cost, hash_start.elapsed());
        Ok(password_hash)
    }

    /// 평문 비밀번호와 저장된 해시를 비교합니다.
    ///
    /// 형식이 잘못된 해시는 불일치로 취급합니다.
    pub fn verify_password(&self, plaintext: &str, password_hash: &str) -> bool {
        let verify_start = std::time::Instant::now();

        let matched = verify(plaintext, password_hash).unwrap_or_else(|e| {
            log::warn!("Stored password hash could not be parsed: {}", e);
            false
        });

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        matched
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BCRYPT_COST;

    #[test]
    fn test_hash_then_verify() {
        let passwords = PasswordService::new(4);
        let hash = passwords.hash_password("abc123").unwrap();

        assert_ne!(hash, "abc123");
        assert!(passwords.verify_password("abc123", &hash));
        assert!(!passwords.verify_password("wrong", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let passwords = PasswordService::new(4);
        let first = passwords.hash_password("same-password").unwrap();
        let second = passwords.hash_password("same-password").unwrap();

        assert_ne!(first, second);
        assert!(passwords.verify_password("same-password", &second));
    }

    #[test]
    fn test_default_cost_is_encoded_in_hash() {
        let passwords = PasswordService::new(DEFAULT_BCRYPT_COST);
        let hash = passwords.hash_password("abc123").unwrap();

        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let passwords = PasswordService::new(4);
        assert!(!passwords.verify_password("abc123", "not-a-bcrypt-hash"));
        assert!(!passwords.verify_password("", ""));
    }
}
