//! Status Service - 요청 하나를 처리하는 집계기
//!
//! 레지스트리 읽기 → 정규화 → (선택) 헬스 검사 → 필터 → (선택) 헬스 집계 → 엔벨로프.
//! 요청 사이에 공유되는 가변 상태가 없으므로 동시에 호출해도 잠금이 필요 없습니다.

use super::filter::FilterSelection;
use super::health::HealthProber;
use super::summary::summarize;
use super::types::{PluginInfo, PluginStatus, StatusResponse};
use crate::plugin::{source_from_config, PluginSource};
use plugin_status_foundation::{Result, StatusConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// API 액션 이름
pub const API_ACTION: &str = "plugin_status";

/// 헬스 체크를 켜는 유일한 값
pub const HEALTH_ENABLED: &str = "true";

// ============================================================================
// StatusRequest
// ============================================================================

/// 원본 요청 파라미터
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    /// 필터 토큰 (all | active | inactive, 대소문자 무시)
    #[serde(default)]
    pub filter: Option<String>,

    /// 헬스 체크 플래그 (정확히 "true"일 때만 활성)
    #[serde(default)]
    pub health: Option<String>,
}

impl StatusRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 쿼리 파라미터 맵에서 생성
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            filter: params.get("filter").cloned(),
            health: params.get("health").cloned(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_health(mut self, health: impl Into<String>) -> Self {
        self.health = Some(health.into());
        self
    }

    pub fn filter_selection(&self) -> FilterSelection {
        FilterSelection::from_param(self.filter.as_deref())
    }

    /// 문자열 비교 한 번 ("1", "True" 등은 비활성)
    pub fn health_requested(&self) -> bool {
        self.health.as_deref() == Some(HEALTH_ENABLED)
    }
}

// ============================================================================
// PluginStatusService
// ============================================================================

/// 플러그인 상태 집계기
pub struct PluginStatusService<S> {
    source: S,
    prober: HealthProber,
}

impl<S: PluginSource> PluginStatusService<S> {
    pub fn new(source: S, plugins_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            prober: HealthProber::new(plugins_dir),
        }
    }

    /// 요청 처리
    ///
    /// 레지스트리를 읽을 수 없을 때만 실패합니다.
    pub fn handle(&self, request: &StatusRequest) -> Result<StatusResponse> {
        let selection = request.filter_selection();
        let include_health = request.health_requested();

        let (records, active_set) = self.source.snapshot()?;

        let plugins: Vec<PluginInfo> = records
            .iter()
            .map(|record| {
                let info = PluginInfo::from_record(record, active_set.contains(&record.file));
                if include_health {
                    info.with_health(self.prober.probe(&record.file, record))
                } else {
                    info
                }
            })
            .collect();

        // 전체 카운트는 필터와 무관
        let total_plugins = plugins.len();
        let active_plugins = plugins.iter().filter(|p| p.active).count();

        let plugins = selection.mode.apply(plugins);
        let filtered_count = plugins.len();

        // 헬스 집계는 필터링된 결과 기준
        let health_summary = include_health.then(|| summarize(&plugins));

        let simple = simple_message(filtered_count, &selection, active_plugins);

        info!(
            "Plugin status: filter={} ({}) health={} -> {}/{} plugins",
            selection.label, selection.mode, include_health, filtered_count, total_plugins
        );

        Ok(StatusResponse::success(
            simple,
            PluginStatus {
                total_plugins,
                active_plugins,
                inactive_plugins: total_plugins - active_plugins,
                filtered_count,
                filter_applied: selection.label,
                plugins,
                health_summary,
            },
        ))
    }
}

impl PluginStatusService<Box<dyn PluginSource>> {
    /// 설정에서 생성 (레지스트리 파일 또는 디렉토리 스캔)
    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(source_from_config(config), config.resolved_plugins_dir())
    }
}

/// 요약 문구: "{n} extensions[ ({filter})], {active} total active"
pub fn simple_message(filtered_count: usize, selection: &FilterSelection, active: usize) -> String {
    let mut message = format!("{} extensions", filtered_count);
    if selection.is_labelled() {
        message.push_str(&format!(" ({})", selection.label));
    }
    message.push_str(&format!(", {} total active", active));
    message
}
