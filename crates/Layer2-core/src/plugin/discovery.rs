//! Plugin Discovery - 플러그인 디렉토리 스캔
//!
//! 플러그인 루트의 각 하위 디렉토리에서 메인 파일(기본 `plugin.php`)을 찾아
//! 헤더를 파싱합니다. 활성 목록은 별도 JSON 파일(ID 배열)에서 읽습니다.
//!
//! ```text
//! plugins/
//! ├── active_plugins.json      ["status/plugin.php"]
//! ├── status/plugin.php
//! └── shortener/plugin.php
//! ```

use super::manifest::PluginRecord;
use super::registry::PluginSource;
use plugin_status_foundation::{Error, Result, StatusConfig};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 디렉토리 스캔 기반 소스
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// 플러그인 루트
    plugins_dir: PathBuf,

    /// 활성 플러그인 목록 파일
    active_file: PathBuf,

    /// 각 플러그인의 메인 파일 이름
    main_file: String,
}

impl DirectorySource {
    pub fn new(
        plugins_dir: impl Into<PathBuf>,
        active_file: impl Into<PathBuf>,
        main_file: impl Into<String>,
    ) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
            active_file: active_file.into(),
            main_file: main_file.into(),
        }
    }

    /// 설정에서 생성
    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(
            config.resolved_plugins_dir(),
            config.resolved_active_file(),
            config.resolved_main_file(),
        )
    }

    /// 플러그인 디렉토리 하나를 레코드로 변환
    fn read_plugin(&self, dir_name: &str, main_path: &Path) -> PluginRecord {
        let file_id = format!("{}/{}", dir_name, self.main_file);

        match std::fs::read_to_string(main_path) {
            Ok(content) => {
                let record = PluginRecord::from_header(file_id, &content);
                debug!("Found plugin: {} ({:?})", record.file, record.name);
                record
            }
            Err(e) => {
                // 읽을 수 없는 파일도 목록에는 남김 (헬스 체크에서 드러남)
                warn!("Failed to read plugin file {:?}: {}", main_path, e);
                PluginRecord::new(file_id)
            }
        }
    }
}

impl PluginSource for DirectorySource {
    fn list_all(&self) -> Result<Vec<PluginRecord>> {
        let entries = std::fs::read_dir(&self.plugins_dir).map_err(|e| {
            Error::registry(format!(
                "cannot scan plugins directory {}: {}",
                self.plugins_dir.display(),
                e
            ))
        })?;

        let mut plugins = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", self.plugins_dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let main_path = path.join(&self.main_file);
            if !main_path.exists() {
                continue;
            }

            let dir_name = entry.file_name().to_string_lossy().into_owned();
            plugins.push(self.read_plugin(&dir_name, &main_path));
        }

        // read_dir 순서는 플랫폼마다 다름
        plugins.sort_by(|a, b| a.file.cmp(&b.file));

        info!(
            "Discovered {} plugins in {}",
            plugins.len(),
            self.plugins_dir.display()
        );
        Ok(plugins)
    }

    fn list_active(&self) -> Result<HashSet<String>> {
        if !self.active_file.exists() {
            debug!("Active list {:?} not found, using empty", self.active_file);
            return Ok(HashSet::new());
        }

        let content = std::fs::read_to_string(&self.active_file).map_err(|e| {
            Error::registry(format!(
                "cannot read active list {}: {}",
                self.active_file.display(),
                e
            ))
        })?;

        let active: Vec<String> = serde_json::from_str(&content).map_err(|e| {
            Error::registry(format!(
                "cannot parse active list {}: {}",
                self.active_file.display(),
                e
            ))
        })?;

        Ok(active.into_iter().collect())
    }
}

// ============================================================================
// 테스트
// ============================================================================
