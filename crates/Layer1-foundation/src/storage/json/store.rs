//! JSON 설정 저장소 (읽기 전용)
//!
//! 글로벌(`~/.config/plugin-status/`)과 프로젝트(`.plugin-status/`) 두 위치를
//! 같은 방식으로 읽습니다. 실패는 모두 `Error::Config`입니다.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 설정 디렉토리 이름
pub const APP_DIR_NAME: &str = "plugin-status";

/// 프로젝트 설정 디렉토리 이름
pub const PROJECT_DIR_NAME: &str = ".plugin-status";

/// 설정 파일 디렉토리 하나
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 설정. 플랫폼에 설정 디렉토리가 없으면 `Error::Config`
    pub fn global() -> Result<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_DIR_NAME)))
            .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))
    }

    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(PROJECT_DIR_NAME))
    }

    /// 현재 작업 디렉토리 기준 프로젝트 설정
    pub fn current_project() -> Result<Self> {
        std::env::current_dir()
            .map(Self::project)
            .map_err(|e| Error::Config(format!("Cannot get current directory: {}", e)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// 파일이 있어야 하는 로드
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        self.load_optional(filename)?.ok_or_else(|| {
            Error::Config(format!("Missing {}", self.file_path(filename).display()))
        })
    }

    /// 파일이 없으면 `None`, 있는데 읽거나 파싱할 수 없으면 에러
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.file_path(filename);
        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        value: u32,
    }

    #[test]
    fn test_load_optional_missing() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("nowhere"));

        let loaded: Option<Sample> = store.load_optional("missing.json").unwrap();
        assert!(loaded.is_none());

        let err = store.load::<Sample>("missing.json").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_and_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::project(temp.path());
        std::fs::create_dir_all(store.base_dir()).unwrap();
        std::fs::write(store.file_path("ok.json"), r#"{"value": 7}"#).unwrap();
        std::fs::write(store.file_path("bad.json"), "{ not json").unwrap();

        let ok: Sample = store.load("ok.json").unwrap();
        assert_eq!(ok, Sample { value: 7 });

        // 존재하지만 깨진 파일은 Optional 로드에서도 에러
        let err = store.load_optional::<Sample>("bad.json").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("bad.json"));
    }
}
