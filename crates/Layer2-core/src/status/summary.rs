//! Health Summarizer - 헬스 결과 집계

use super::types::{HealthSummary, PluginInfo, PluginIssue};

/// 필터링된 플러그인들의 헬스 결과 집계
///
/// 헬스 결과가 없는 플러그인은 건너뜁니다. 검사 대상이 없으면 백분율은 0입니다.
pub fn summarize(plugins: &[PluginInfo]) -> HealthSummary {
    let mut healthy_plugins = 0;
    let mut total_checked = 0;
    let mut total_size_bytes = 0u64;
    let mut issues = Vec::new();

    for plugin in plugins {
        let Some(health) = &plugin.health else {
            continue;
        };

        total_checked += 1;
        total_size_bytes += health.file_size;

        if health.is_healthy() {
            healthy_plugins += 1;
        } else {
            issues.push(PluginIssue {
                plugin: plugin.name.clone(),
                issues: health.issues(),
            });
        }
    }

    HealthSummary {
        healthy_plugins,
        total_checked,
        health_percentage: percentage(healthy_plugins, total_checked),
        total_size_bytes,
        issues,
    }
}

/// 소수점 둘째 자리 반올림
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = part as f64 / total as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
