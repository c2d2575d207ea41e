//! Plugin Record - 레지스트리가 제공하는 원본 메타데이터
//!
//! 플러그인 파일의 헤더 주석 블록을 파싱합니다.
//!
//! ```text
//! /*
//! Plugin Name: Plugin Status API
//! Plugin URI: https://example.com/plugin-status
//! Description: Lists plugins and their status
//! Version: 1.1.0
//! Author: Jane Doe
//! Author URI: https://example.com
//! */
//! ```

use serde::{Deserialize, Serialize};

/// 헤더 키 목록 (파싱 대상)
const HEADER_NAME: &str = "Plugin Name";
const HEADER_PLUGIN_URI: &str = "Plugin URI";
const HEADER_DESCRIPTION: &str = "Description";
const HEADER_VERSION: &str = "Version";
const HEADER_AUTHOR: &str = "Author";
const HEADER_AUTHOR_URI: &str = "Author URI";

/// 레지스트리 원본 레코드
///
/// 모든 메타데이터 필드는 선택적입니다. 누락된 값은 정규화 단계에서
/// 기본값으로 채워지며, 여기서는 "없음"을 그대로 보존합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    /// 플러그인 ID (플러그인 루트 기준 상대 경로, 예: "my-plugin/plugin.php")
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_uri: Option<String>,
}

impl PluginRecord {
    /// 메타데이터 없는 레코드 생성
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// 플러그인 파일 내용에서 헤더 파싱
    pub fn from_header(file: impl Into<String>, content: &str) -> Self {
        let mut record = Self::new(file);

        let Some(block) = header_block(content) else {
            return record;
        };

        for line in block.lines() {
            let line = line.trim().trim_start_matches('*').trim();
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let slot = match key.trim() {
                HEADER_NAME => &mut record.name,
                HEADER_PLUGIN_URI => &mut record.plugin_uri,
                HEADER_DESCRIPTION => &mut record.description,
                HEADER_VERSION => &mut record.version,
                HEADER_AUTHOR => &mut record.author,
                HEADER_AUTHOR_URI => &mut record.author_uri,
                _ => continue,
            };

            // 첫 번째 값 우선
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        record
    }

    /// 헤더(이름)가 존재하는지
    pub fn has_header(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_plugin_uri(mut self, uri: impl Into<String>) -> Self {
        self.plugin_uri = Some(uri.into());
        self
    }
}

/// 첫 번째 `/* ... */` 블록 내용
fn header_block(content: &str) -> Option<&str> {
    let start = content.find("/*")? + 2;
    let end = content[start..].find("*/")? + start;
    Some(&content[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<?php
/*
Plugin Name: Plugin Status API
Plugin URI: https://github.com/example/plugin-status
Description: Adds API action to list enabled plugins
Version: 1.1.0
Author: Example Author
Author URI: https://github.com/example
*/

// Plugin Name: ignored because it is outside the header
"#;

    #[test]
    fn test_parse_full_header() {
        let record = PluginRecord::from_header("status/plugin.php", HEADER);

        assert_eq!(record.file, "status/plugin.php");
        assert_eq!(record.name.as_deref(), Some("Plugin Status API"));
        assert_eq!(
            record.plugin_uri.as_deref(),
            Some("https://github.com/example/plugin-status")
        );
        assert_eq!(record.version.as_deref(), Some("1.1.0"));
        assert_eq!(record.author_uri.as_deref(), Some("https://github.com/example"));
        assert!(record.has_header());
    }

    #[test]
    fn test_parse_docblock_style() {
        let content = "<?php\n/**\n * Plugin Name: Starred\n * Version: 0.2\n * Unknown Key: x\n */";
        let record = PluginRecord::from_header("starred/plugin.php", content);

        assert_eq!(record.name.as_deref(), Some("Starred"));
        assert_eq!(record.version.as_deref(), Some("0.2"));
        assert!(record.author.is_none());
    }

    #[test]
    fn test_missing_header_block() {
        let record = PluginRecord::from_header("bare/plugin.php", "<?php echo 'hi';");
        assert_eq!(record, PluginRecord::new("bare/plugin.php"));
        assert!(!record.has_header());
    }

    #[test]
    fn test_empty_name_is_absent() {
        let record = PluginRecord::from_header("empty/plugin.php", "/*\nPlugin Name:   \nVersion: 1\n*/");
        assert!(record.name.is_none());
        assert!(!record.has_header());
        assert_eq!(record.version.as_deref(), Some("1"));
    }

    #[test]
    fn test_has_header_rejects_empty_string() {
        let record = PluginRecord::new("x/plugin.php").with_name("");
        assert!(!record.has_header());
    }
}
