//! Registry File - JSON 레지스트리 파일 소스
//!
//! 호스트가 내보낸 레지스트리 스냅샷(JSON)을 읽습니다. 캐시하지 않으며,
//! 한 요청은 `snapshot()`으로 파일을 한 번만 읽습니다.

use super::manifest::PluginRecord;
use super::registry::PluginSource;
use plugin_status_foundation::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// 레지스트리 파일 구조
///
/// ```json
/// {
///   "version": "1.0",
///   "plugins": [{ "file": "status/plugin.php", "name": "Plugin Status API" }],
///   "active": ["status/plugin.php"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub plugins: Vec<PluginRecord>,

    #[serde(default)]
    pub active: Vec<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl RegistryFile {
    /// 레코드 목록과 활성 집합으로 분리
    fn into_parts(self) -> (Vec<PluginRecord>, HashSet<String>) {
        (self.plugins, self.active.into_iter().collect())
    }
}

/// JSON 레지스트리 파일 기반 소스
#[derive(Debug, Clone)]
pub struct RegistryFileSource {
    path: PathBuf,
}

impl RegistryFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 레지스트리 파일 읽기. 읽기/파싱 실패는 모두 `RegistryUnavailable`
    pub fn read(&self) -> Result<RegistryFile> {
        let raw = std::fs::read(&self.path).map_err(|e| {
            Error::registry(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let file: RegistryFile = serde_json::from_slice(&raw).map_err(|e| {
            Error::registry(format!("cannot parse {}: {}", self.path.display(), e))
        })?;

        debug!(
            "Read registry {} (v{}, {} plugins, {} active)",
            self.path.display(),
            file.version,
            file.plugins.len(),
            file.active.len()
        );
        Ok(file)
    }
}

impl PluginSource for RegistryFileSource {
    fn list_all(&self) -> Result<Vec<PluginRecord>> {
        Ok(self.read()?.plugins)
    }

    fn list_active(&self) -> Result<HashSet<String>> {
        Ok(self.read()?.into_parts().1)
    }

    fn snapshot(&self) -> Result<(Vec<PluginRecord>, HashSet<String>)> {
        let (plugins, active) = self.read()?.into_parts();
        info!("Loaded {} plugins from registry file", plugins.len());
        Ok((plugins, active))
    }
}
