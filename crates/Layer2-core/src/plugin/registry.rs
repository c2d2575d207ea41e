//! Plugin Source - 레지스트리 접근 인터페이스
//!
//! 상태 집계기는 호출 시점에 두 컬렉션(전체 레코드, 활성 ID 집합)만 읽습니다.
//! 전역 상태 대신 이 trait을 통해 주입합니다.

use super::manifest::PluginRecord;
use plugin_status_foundation::Result;
use std::collections::HashSet;

/// 플러그인 레지스트리 읽기 전용 인터페이스
pub trait PluginSource: Send + Sync {
    /// 설치된 모든 플러그인 (레지스트리 순서 유지)
    fn list_all(&self) -> Result<Vec<PluginRecord>>;

    /// 활성화된 플러그인 ID 집합
    fn list_active(&self) -> Result<HashSet<String>>;

    /// 한 요청에서 쓰는 두 컬렉션을 함께 읽기
    ///
    /// 한 번의 읽기로 둘 다 얻을 수 있는 소스는 이 메서드를 재정의합니다.
    fn snapshot(&self) -> Result<(Vec<PluginRecord>, HashSet<String>)> {
        Ok((self.list_all()?, self.list_active()?))
    }
}

impl<T: PluginSource + ?Sized> PluginSource for &T {
    fn list_all(&self) -> Result<Vec<PluginRecord>> {
        (**self).list_all()
    }

    fn list_active(&self) -> Result<HashSet<String>> {
        (**self).list_active()
    }

    fn snapshot(&self) -> Result<(Vec<PluginRecord>, HashSet<String>)> {
        (**self).snapshot()
    }
}

impl<T: PluginSource + ?Sized> PluginSource for Box<T> {
    fn list_all(&self) -> Result<Vec<PluginRecord>> {
        (**self).list_all()
    }

    fn list_active(&self) -> Result<HashSet<String>> {
        (**self).list_active()
    }

    fn snapshot(&self) -> Result<(Vec<PluginRecord>, HashSet<String>)> {
        (**self).snapshot()
    }
}

// ============================================================================
// MemorySource - 메모리 기반 레지스트리
// ============================================================================

/// 메모리 기반 레지스트리 (임베딩, 테스트용)
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<PluginRecord>,
    active: HashSet<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 레코드 추가
    pub fn with_record(mut self, record: PluginRecord) -> Self {
        self.records.push(record);
        self
    }

    /// 레코드 추가 + 활성화
    pub fn with_active_record(mut self, record: PluginRecord) -> Self {
        self.active.insert(record.file.clone());
        self.records.push(record);
        self
    }
}

impl PluginSource for MemorySource {
    fn list_all(&self) -> Result<Vec<PluginRecord>> {
        Ok(self.records.clone())
    }

    fn list_active(&self) -> Result<HashSet<String>> {
        Ok(self.active.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_order_and_active() {
        let source = MemorySource::new()
            .with_record(PluginRecord::new("b/plugin.php"))
            .with_active_record(PluginRecord::new("a/plugin.php"))
            .with_record(PluginRecord::new("c/plugin.php"));

        let files: Vec<_> = source
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.file)
            .collect();
        assert_eq!(files, vec!["b/plugin.php", "a/plugin.php", "c/plugin.php"]);

        let active = source.list_active().unwrap();
        assert!(active.contains("a/plugin.php"));
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn PluginSource> =
            Box::new(MemorySource::new().with_active_record(PluginRecord::new("x/plugin.php")));
        assert_eq!(source.list_all().unwrap().len(), 1);
        assert_eq!(source.list_active().unwrap().len(), 1);

        let (records, active) = source.snapshot().unwrap();
        assert_eq!(records.len(), 1);
        assert!(active.contains("x/plugin.php"));
    }
}
