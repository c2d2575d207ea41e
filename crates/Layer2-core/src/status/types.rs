//! Status Types - 응답 엔벨로프
//!
//! 필드 이름은 API 호환 계약이므로 serde 이름을 그대로 유지해야 합니다.

use crate::plugin::PluginRecord;
use serde::{Deserialize, Serialize};

/// 이름이 없는 플러그인의 표시 이름
pub const UNKNOWN_PLUGIN_NAME: &str = "Unknown";

/// 성공 상태 코드
pub const STATUS_OK: u16 = 200;

/// 성공 메시지
pub const MESSAGE_SUCCESS: &str = "success";

// ============================================================================
// PluginInfo
// ============================================================================

/// 정규화된 플러그인 정보 (요청마다 새로 생성)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub plugin_file: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub plugin_uri: String,
    pub author_uri: String,

    /// 활성 집합 포함 여부
    pub active: bool,

    /// 헬스 체크 결과 (요청 시에만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthVerdict>,
}

impl PluginInfo {
    /// 레코드 정규화: 이름 누락 → "Unknown", 나머지 누락 → ""
    pub fn from_record(record: &PluginRecord, active: bool) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            plugin_file: record.file.clone(),
            name: record
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_PLUGIN_NAME.to_string()),
            description: text(&record.description),
            version: text(&record.version),
            author: text(&record.author),
            plugin_uri: text(&record.plugin_uri),
            author_uri: text(&record.author_uri),
            active,
            health: None,
        }
    }

    pub fn with_health(mut self, health: HealthVerdict) -> Self {
        self.health = Some(health);
        self
    }
}

// ============================================================================
// HealthVerdict
// ============================================================================

/// 플러그인 하나의 헬스 체크 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthVerdict {
    pub file_exists: bool,
    pub readable: bool,

    /// 메타데이터 이름 존재 여부 (파일 상태와 무관)
    pub has_header: bool,

    /// 바이트 단위 크기 (파일이 없으면 0)
    pub file_size: u64,
}

impl HealthVerdict {
    /// 세 가지 검사를 모두 통과했는지
    pub fn is_healthy(&self) -> bool {
        self.file_exists && self.readable && self.has_header
    }

    /// 실패한 검사 목록 (고정 순서)
    pub fn issues(&self) -> Vec<IssueCode> {
        let mut issues = Vec::new();
        if !self.file_exists {
            issues.push(IssueCode::FileMissing);
        }
        if !self.readable {
            issues.push(IssueCode::NotReadable);
        }
        if !self.has_header {
            issues.push(IssueCode::InvalidHeader);
        }
        issues
    }
}

/// 헬스 이슈 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    FileMissing,
    NotReadable,
    InvalidHeader,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::FileMissing => "file_missing",
            IssueCode::NotReadable => "not_readable",
            IssueCode::InvalidHeader => "invalid_header",
        }
    }
}

// ============================================================================
// HealthSummary
// ============================================================================

/// 헬스 체크 집계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub healthy_plugins: usize,
    pub total_checked: usize,

    /// 소수점 둘째 자리까지 반올림한 백분율 (검사 대상이 없으면 0)
    pub health_percentage: f64,

    pub total_size_bytes: u64,
    pub issues: Vec<PluginIssue>,
}

/// 건강하지 않은 플러그인과 그 이슈들
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginIssue {
    pub plugin: String,
    pub issues: Vec<IssueCode>,
}

// ============================================================================
// Envelope
// ============================================================================

/// `plugin_status` 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginStatus {
    pub total_plugins: usize,
    pub active_plugins: usize,
    pub inactive_plugins: usize,
    pub filtered_count: usize,

    /// 요청된 필터 라벨 (소문자)
    pub filter_applied: String,

    pub plugins: Vec<PluginInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
}

/// API 응답 엔벨로프
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// 사람이 읽는 요약 한 줄
    pub simple: String,

    pub message: String,

    pub plugin_status: PluginStatus,
}

impl StatusResponse {
    /// 성공 엔벨로프
    pub fn success(simple: String, plugin_status: PluginStatus) -> Self {
        Self {
            status_code: STATUS_OK,
            simple,
            message: MESSAGE_SUCCESS.to_string(),
            plugin_status,
        }
    }

    /// JSON 값으로 변환
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
