//! # 문자열 유틸리티
//!
//! 사용자 레코드에 저장되기 전 문자열 필드를 정규화하는 함수들입니다.

use crate::errors::AppError;

/// 이메일 주소 정규화
///
/// 앞뒤 공백을 제거하고 소문자로 변환합니다. 빈 값이면 ValidationError를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_email;
///
/// assert_eq!(normalize_email("  Alice@Example.COM ").unwrap(), "alice@example.com");
/// assert!(normalize_email("   ").is_err());
/// ```
pub fn normalize_email(value: &str) -> Result<String, AppError> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(AppError::ValidationError("이메일은 필수입니다".to_string()));
    }
    Ok(normalized)
}

/// 이메일이 이미 정규화된 형태인지 확인
pub fn is_normalized_email(value: &str) -> bool {
    !value.is_empty() && value.trim() == value && value.to_lowercase() == value
}

/// 선택적 문자열 필드 정리
///
/// None 이거나 공백만 있는 경우 None, 그 외에는 trim 된 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Alice@Example.COM ").unwrap(), "alice@example.com");
        assert_eq!(normalize_email("bob@example.com").unwrap(), "bob@example.com");
    }

    #[test]
    fn test_normalize_email_rejects_blank() {
        assert!(matches!(normalize_email(""), Err(AppError::ValidationError(_))));
        assert!(matches!(normalize_email("  \t "), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_is_normalized_email() {
        assert!(is_normalized_email("alice@example.com"));
        assert!(!is_normalized_email("Alice@example.com"));
        assert!(!is_normalized_email(" alice@example.com"));
        assert!(!is_normalized_email(""));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some(String::new())), None);
        assert_eq!(clean_optional_string(None), None);
    }
}
