//! Storage module for plugin-status
//!
//! - `json`: JSON - 설정 파일 로드 (읽기 전용, 상태를 저장하지 않음)

mod json;

pub use json::{JsonStore, APP_DIR_NAME, PROJECT_DIR_NAME};
