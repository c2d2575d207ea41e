//! Health Prober - 플러그인 파일 진단
//!
//! 진단 목적이므로 파일시스템 에러는 전파하지 않고 `false`/`0`으로 기록합니다.
//! 재시도나 캐시 없이 호출 시점의 파일시스템 상태만 반영합니다.

use super::types::HealthVerdict;
use crate::plugin::PluginRecord;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// 플러그인 헬스 검사기
#[derive(Debug, Clone)]
pub struct HealthProber {
    /// 플러그인 루트
    plugins_dir: PathBuf,
}

impl HealthProber {
    pub fn new(plugins_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
        }
    }

    /// 플러그인 ID → 파일 경로
    ///
    /// 결과는 항상 플러그인 루트 아래입니다. 절대 경로나 `..`를 포함한 ID는 `None`.
    pub fn resolve(&self, file_id: &str) -> Option<PathBuf> {
        let mut path = self.plugins_dir.clone();
        for component in Path::new(file_id).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) | Component::ParentDir => return None,
            }
        }
        Some(path)
    }

    /// 플러그인 하나 검사
    pub fn probe(&self, file_id: &str, record: &PluginRecord) -> HealthVerdict {
        let (file_exists, readable, file_size) = match self.resolve(file_id) {
            Some(path) => {
                let metadata = std::fs::metadata(&path).ok();
                let exists = metadata.is_some();
                let readable = exists && File::open(&path).is_ok();
                (exists, readable, metadata.map(|m| m.len()).unwrap_or(0))
            }
            None => {
                debug!("Plugin id escapes plugins dir: {}", file_id);
                (false, false, 0)
            }
        };

        let verdict = HealthVerdict {
            file_exists,
            readable,
            has_header: record.has_header(),
            file_size,
        };

        debug!("Probed {}: {:?}", file_id, verdict);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_healthy_file() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("ok")).unwrap();
        std::fs::write(temp.path().join("ok/plugin.php"), "0123456789").unwrap();

        let prober = HealthProber::new(temp.path());
        let record = PluginRecord::new("ok/plugin.php").with_name("Ok");
        let verdict = prober.probe("ok/plugin.php", &record);

        assert!(verdict.file_exists);
        assert!(verdict.readable);
        assert!(verdict.has_header);
        assert_eq!(verdict.file_size, 10);
        assert!(verdict.is_healthy());
    }

    #[test]
    fn test_probe_missing_file_keeps_header() {
        let temp = TempDir::new().unwrap();
        let prober = HealthProber::new(temp.path());

        // 레지스트리에는 헤더가 있지만 파일은 사라진 경우
        let record = PluginRecord::new("stale/plugin.php").with_name("Stale");
        let verdict = prober.probe("stale/plugin.php", &record);

        assert!(!verdict.file_exists);
        assert!(!verdict.readable);
        assert!(verdict.has_header);
        assert_eq!(verdict.file_size, 0);
    }

    #[test]
    fn test_probe_missing_header() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bare.php"), "<?php").unwrap();

        let prober = HealthProber::new(temp.path());
        let verdict = prober.probe("bare.php", &PluginRecord::new("bare.php"));

        assert!(verdict.file_exists);
        assert!(!verdict.has_header);
        assert_eq!(verdict.file_size, 5);
    }

    #[test]
    fn test_ids_outside_plugins_dir_are_not_found() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let secret = outside.path().join("secret.php");
        std::fs::write(&secret, "/* Plugin Name: X */").unwrap();

        let prober = HealthProber::new(root.path());

        // 절대 경로 ID
        let absolute = secret.to_string_lossy().to_string();
        let verdict = prober.probe(&absolute, &PluginRecord::new(absolute.clone()).with_name("X"));
        assert!(!verdict.file_exists);
        assert!(!verdict.readable);
        assert!(verdict.has_header);
        assert_eq!(verdict.file_size, 0);

        // 상위 디렉토리로 빠져나가는 ID
        std::fs::create_dir_all(root.path().join("inner")).unwrap();
        let prober = HealthProber::new(root.path().join("inner"));
        std::fs::write(root.path().join("sibling.php"), "0123").unwrap();
        let verdict = prober.probe("../sibling.php", &PluginRecord::new("../sibling.php"));
        assert!(!verdict.file_exists);
        assert_eq!(verdict.file_size, 0);
        assert!(prober.resolve("../sibling.php").is_none());
    }

    #[test]
    fn test_resolve_stays_under_root() {
        let prober = HealthProber::new("/srv/plugins");
        assert_eq!(
            prober.resolve("./hello/plugin.php"),
            Some(PathBuf::from("/srv/plugins/hello/plugin.php"))
        );
        assert!(prober.resolve("/etc/passwd").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locked.php");
        std::fs::write(&path, "secret").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // root는 권한을 무시하므로 실제로 막혔을 때만 검증
        if File::open(&path).is_err() {
            let prober = HealthProber::new(temp.path());
            let verdict = prober.probe("locked.php", &PluginRecord::new("locked.php").with_name("L"));
            assert!(verdict.file_exists);
            assert!(!verdict.readable);
            assert_eq!(verdict.file_size, 6);
        }

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
}
