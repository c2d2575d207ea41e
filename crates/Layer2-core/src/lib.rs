//! plugin-status-core: Core of plugin-status
//!
//! Layer2 - 플러그인 상태 집계 레이어
//!
//! # 주요 모듈
//!
//! - `plugin`: 레지스트리 소스 (디렉토리 스캔, JSON 레지스트리, 메모리)
//! - `status`: 헬스 검사, 필터, 집계, 응답 엔벨로프, 관리 화면 안내
//!
//! # 사용 예시
//!
//! ```ignore
//! use plugin_status_core::{PluginStatusService, StatusRequest};
//! use plugin_status_foundation::StatusConfig;
//!
//! let config = StatusConfig::load_from(&StatusConfig::default_stores()?)?;
//! let service = PluginStatusService::from_config(&config);
//!
//! let request = StatusRequest::new().with_filter("active").with_health("true");
//! let response = service.handle(&request)?;
//! println!("{}", response.simple);
//! ```

pub mod plugin;
pub mod status;

// Re-exports: Plugin sources
pub use plugin::{
    source_from_config, DirectorySource, MemorySource, PluginRecord, PluginSource, RegistryFile,
    RegistryFileSource,
};

// Re-exports: Status
pub use status::{
    simple_message, summarize, AdminNotice, FilterSelection, HealthProber, HealthSummary,
    HealthVerdict, IssueCode, PluginInfo, PluginIssue, PluginStatus, PluginStatusService,
    StatusFilter, StatusRequest, StatusResponse, API_ACTION, DEFAULT_FILTER, HEALTH_ENABLED,
    MESSAGE_SUCCESS, NOTICE_PAGE, STATUS_OK, UNKNOWN_PLUGIN_NAME,
};
