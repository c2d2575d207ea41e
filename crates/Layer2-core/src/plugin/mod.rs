//! # Plugin Registry Sources
//!
//! 호스트 플러그인 레지스트리를 읽는 어댑터
//!
//! ## 개요
//!
//! 상태 집계기는 레지스트리에서 두 가지만 필요로 합니다:
//! - 설치된 모든 플러그인 레코드 (순서 유지)
//! - 활성화된 플러그인 ID 집합
//!
//! ## 소스 타입
//!
//! 1. **DirectorySource**: 플러그인 디렉토리를 스캔하고 헤더를 파싱
//! 2. **RegistryFileSource**: 호스트가 내보낸 JSON 레지스트리 파일
//! 3. **MemorySource**: 메모리 기반 (임베딩, 테스트)
//!
//! ## 예시
//!
//! ```ignore
//! let config = StatusConfig::load_from(&StatusConfig::default_stores()?)?;
//! let source = source_from_config(&config);
//! let records = source.list_all()?;
//! ```

mod discovery;
mod manifest;
mod registry;
mod store;

pub use discovery::DirectorySource;
pub use manifest::PluginRecord;
pub use registry::{MemorySource, PluginSource};
pub use store::{RegistryFile, RegistryFileSource};

use plugin_status_foundation::StatusConfig;

/// 설정에 맞는 소스 선택 (레지스트리 파일 우선)
pub fn source_from_config(config: &StatusConfig) -> Box<dyn PluginSource> {
    match config.registry_file() {
        Some(path) => Box::new(RegistryFileSource::new(path)),
        None => Box::new(DirectorySource::from_config(config)),
    }
}
