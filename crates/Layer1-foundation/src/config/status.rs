//! Status Config - 플러그인 상태 API 설정
//!
//! 글로벌 → 프로젝트 순서로 병합 (나중 레벨이 우선)

use crate::storage::JsonStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 설정 파일명
pub const STATUS_CONFIG_FILE: &str = "config.json";

/// 기본 플러그인 디렉토리
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// 활성 플러그인 목록 파일 기본 이름
pub const DEFAULT_ACTIVE_FILE: &str = "active_plugins.json";

/// 플러그인 헤더를 담은 기본 파일 이름
pub const DEFAULT_MAIN_FILE: &str = "plugin.php";

// ============================================================================
// StatusConfig
// ============================================================================

/// 플러그인 상태 API 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfig {
    /// 플러그인 루트 디렉토리 (발견 + 헬스 체크 경로 기준)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins_dir: Option<PathBuf>,

    /// JSON 레지스트리 파일 (설정 시 디렉토리 스캔 대신 사용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_file: Option<PathBuf>,

    /// 활성 플러그인 ID 목록 파일 (디렉토리 모드)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_plugins_file: Option<PathBuf>,

    /// 각 플러그인 디렉토리의 메인 파일 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_file: Option<String>,
}

impl StatusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 기본 설정 위치: 글로벌 → 프로젝트 (글로벌 디렉토리가 없는 플랫폼이면 프로젝트만)
    pub fn default_stores() -> Result<Vec<JsonStore>> {
        let mut stores = Vec::new();
        if let Ok(global) = JsonStore::global() {
            stores.push(global);
        }
        stores.push(JsonStore::current_project()?);
        Ok(stores)
    }

    /// 주어진 저장소들을 순서대로 병합 (뒤쪽이 우선)
    pub fn load_from(stores: &[JsonStore]) -> Result<Self> {
        let mut config = Self::new();

        for store in stores {
            if let Some(level) = store.load_optional::<StatusConfig>(STATUS_CONFIG_FILE)? {
                debug!("Loaded config from {}", store.file_path(STATUS_CONFIG_FILE).display());
                config.merge(level);
            }
        }

        Ok(config)
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: StatusConfig) {
        if other.plugins_dir.is_some() {
            self.plugins_dir = other.plugins_dir;
        }
        if other.registry_file.is_some() {
            self.registry_file = other.registry_file;
        }
        if other.active_plugins_file.is_some() {
            self.active_plugins_file = other.active_plugins_file;
        }
        if other.main_file.is_some() {
            self.main_file = other.main_file;
        }
    }

    // ========================================================================
    // Resolved values
    // ========================================================================

    pub fn resolved_plugins_dir(&self) -> PathBuf {
        self.plugins_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLUGINS_DIR))
    }

    /// 활성 목록 파일 (기본: `<pluginsDir>/active_plugins.json`)
    pub fn resolved_active_file(&self) -> PathBuf {
        self.active_plugins_file
            .clone()
            .unwrap_or_else(|| self.resolved_plugins_dir().join(DEFAULT_ACTIVE_FILE))
    }

    pub fn resolved_main_file(&self) -> &str {
        self.main_file.as_deref().unwrap_or(DEFAULT_MAIN_FILE)
    }

    pub fn registry_file(&self) -> Option<&Path> {
        self.registry_file.as_deref()
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugins_dir = Some(dir.into());
        self
    }

    pub fn with_registry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_file = Some(path.into());
        self
    }

    pub fn active_plugins_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.active_plugins_file = Some(path.into());
        self
    }

    pub fn main_file(mut self, name: impl Into<String>) -> Self {
        self.main_file = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    fn write_config(store: &JsonStore, content: &str) {
        std::fs::create_dir_all(store.base_dir()).unwrap();
        std::fs::write(store.file_path(STATUS_CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = StatusConfig::new();
        assert_eq!(config.resolved_plugins_dir(), PathBuf::from("plugins"));
        assert_eq!(
            config.resolved_active_file(),
            PathBuf::from("plugins").join("active_plugins.json")
        );
        assert_eq!(config.resolved_main_file(), "plugin.php");
        assert!(config.registry_file().is_none());
    }

    #[test]
    fn test_project_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = JsonStore::new(temp.path().join("global"));
        let project = JsonStore::project(temp.path().join("work"));

        write_config(&global, r#"{"pluginsDir": "/srv/plugins", "mainFile": "main.php"}"#);
        write_config(&project, r#"{"pluginsDir": "./local-plugins"}"#);

        let config = StatusConfig::load_from(&[global, project]).unwrap();
        assert_eq!(config.plugins_dir, Some(PathBuf::from("./local-plugins")));
        // 프로젝트에 없는 값은 글로벌 유지
        assert_eq!(config.resolved_main_file(), "main.php");
    }

    #[test]
    fn test_missing_files_are_not_errors() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("nothing"));
        let config = StatusConfig::load_from(&[store]).unwrap();
        assert_eq!(config, StatusConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        write_config(&store, "{ broken");

        let err = StatusConfig::load_from(&[store]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = StatusConfig::new()
            .plugins_dir("/opt/app/plugins")
            .with_registry_file("/opt/app/registry.json")
            .active_plugins_file("/opt/app/active.json");

        assert_eq!(config.registry_file(), Some(Path::new("/opt/app/registry.json")));
        assert_eq!(config.resolved_active_file(), PathBuf::from("/opt/app/active.json"));
    }
}
