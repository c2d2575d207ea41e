//! Error types for plugin-status
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// plugin-status 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 레지스트리 관련
    // ========================================================================
    /// 플러그인 레지스트리를 읽을 수 없음 (요청 전체 실패)
    #[error("Plugin registry unavailable: {0}")]
    RegistryUnavailable(String),
}

impl Error {
    /// 레지스트리 접근 실패인지 확인
    pub fn is_registry_failure(&self) -> bool {
        matches!(self, Error::RegistryUnavailable(_))
    }

    /// 설정 파일 문제인지 확인
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// 레지스트리 에러 생성 헬퍼
    pub fn registry(message: impl Into<String>) -> Self {
        Error::RegistryUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_failure_classification() {
        let err = Error::registry("plugins directory missing");
        assert!(err.is_registry_failure());
        assert!(!err.is_config_error());
        assert_eq!(
            err.to_string(),
            "Plugin registry unavailable: plugins directory missing"
        );
    }

    #[test]
    fn test_config_classification() {
        let err = Error::Config("Failed to parse config.json".to_string());
        assert!(err.is_config_error());
        assert!(!err.is_registry_failure());
        assert_eq!(err.to_string(), "Configuration error: Failed to parse config.json");
    }
}
