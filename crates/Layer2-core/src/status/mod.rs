//! # Plugin Status
//!
//! 플러그인 상태 집계기
//!
//! ## 흐름
//!
//! ```text
//! PluginSource ──► PluginInfo (정규화, active 계산)
//!                      │
//!                      ├──► HealthProber (health=true 일 때)
//!                      ▼
//!                 StatusFilter (all | active | inactive)
//!                      │
//!                      ├──► summarize (health=true 일 때, 필터 결과 기준)
//!                      ▼
//!                 StatusResponse (statusCode, simple, message, plugin_status)
//! ```

mod filter;
mod health;
mod notice;
mod service;
mod summary;
mod types;

pub use filter::{FilterSelection, StatusFilter, DEFAULT_FILTER};
pub use health::HealthProber;
pub use notice::{AdminNotice, NOTICE_PAGE};
pub use service::{simple_message, PluginStatusService, StatusRequest, API_ACTION, HEALTH_ENABLED};
pub use summary::summarize;
pub use types::{
    HealthSummary, HealthVerdict, IssueCode, PluginInfo, PluginIssue, PluginStatus,
    StatusResponse, MESSAGE_SUCCESS, STATUS_OK, UNKNOWN_PLUGIN_NAME,
};
