//! Filter Engine - 활성 상태로 플러그인 선택
//!
//! 필터 값은 사용자 입력이므로 절대 실패하지 않습니다. 알 수 없는 값은 `all`로
//! 동작하지만, 응답에 표시되는 라벨은 소문자로 변환한 입력값 그대로입니다.

use super::types::PluginInfo;

/// 기본 필터 라벨
pub const DEFAULT_FILTER: &str = "all";

/// 실제 적용되는 필터 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// 토큰 파싱 (대소문자 무시, 알 수 없으면 All)
    pub fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// 플러그인 하나가 필터에 맞는지
    pub fn matches(&self, info: &PluginInfo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => info.active,
            StatusFilter::Inactive => !info.active,
        }
    }

    /// 안정 필터 (원래 순서 유지)
    pub fn apply(&self, plugins: Vec<PluginInfo>) -> Vec<PluginInfo> {
        match self {
            StatusFilter::All => plugins,
            _ => plugins.into_iter().filter(|p| self.matches(p)).collect(),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 요청된 필터: 응답 라벨 + 실제 동작
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// 소문자로 정규화한 원본 토큰
    pub label: String,

    pub mode: StatusFilter,
}

impl FilterSelection {
    /// 원본 파라미터에서 생성 (없으면 "all")
    pub fn from_param(raw: Option<&str>) -> Self {
        let label = raw.unwrap_or(DEFAULT_FILTER).to_lowercase();
        let mode = StatusFilter::parse(&label);
        Self { label, mode }
    }

    /// 라벨이 `all`이 아닌지 (요약 문구에 표시 여부)
    pub fn is_labelled(&self) -> bool {
        self.label != DEFAULT_FILTER
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::from_param(None)
    }
}
