//! Admin Notice - 플러그인 관리 화면 안내 블록
//!
//! 집계기와 데이터 의존성이 없는 표시 계층입니다.

use super::service::API_ACTION;

/// 안내를 표시할 관리 페이지
pub const NOTICE_PAGE: &str = "plugins";

/// API 사용 안내
pub struct AdminNotice;

impl AdminNotice {
    /// 이 페이지에서 안내가 필요한지
    pub fn is_relevant(page: Option<&str>) -> bool {
        page == Some(NOTICE_PAGE)
    }

    /// 안내 HTML (관련 없는 페이지면 None)
    pub fn for_page(page: Option<&str>) -> Option<String> {
        Self::is_relevant(page).then(Self::render)
    }

    fn render() -> String {
        format!(
            concat!(
                "<div class=\"notice notice-info\">",
                "<p><strong>Plugin Status API:</strong> Query plugin status via API using <code>action={action}</code></p>",
                "<p><small>Supports parameters: <code>filter=active|inactive|all</code>, <code>health=true</code></small></p>",
                "</div>"
            ),
            action = API_ACTION
        )
    }
}
