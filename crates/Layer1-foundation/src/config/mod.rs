//! Config - 통합 설정 관리
//!
//! - `status.rs` - StatusConfig (플러그인 루트, 레지스트리 소스)

mod status;

pub use status::{
    StatusConfig, DEFAULT_ACTIVE_FILE, DEFAULT_MAIN_FILE, DEFAULT_PLUGINS_DIR, STATUS_CONFIG_FILE,
};
