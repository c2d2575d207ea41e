//! # plugin-status-foundation
//!
//! Foundation layer for plugin-status:
//! - Error: 공통 에러 타입 (레지스트리 실패만 요청 밖으로 전파)
//! - Storage: JsonStore (설정 파일 로드)
//! - Config: StatusConfig (글로벌 + 프로젝트 병합)

pub mod config;
pub mod error;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    StatusConfig, DEFAULT_ACTIVE_FILE, DEFAULT_MAIN_FILE, DEFAULT_PLUGINS_DIR, STATUS_CONFIG_FILE,
};

// ============================================================================
// Storage
// ============================================================================
pub use storage::{JsonStore, APP_DIR_NAME, PROJECT_DIR_NAME};
