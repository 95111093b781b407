//! Data models shared across database access and API handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use self::leave::{InvalidStatus, Leave, LeaveStatus};

pub mod leave;
pub mod user;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Query parameters of `GET /api/leaves`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct LeaveListQuery {
    /// 1-based page number (default: 1).
    pub page: Option<i64>,
    /// Page size (default: 10, max: 100).
    pub limit: Option<i64>,
    /// `all`, `Pending`, `Approved` or `Rejected`.
    pub status: Option<String>,
}

impl LeaveListQuery {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.limit)
    }

    pub fn status_filter(&self) -> Result<Option<LeaveStatus>, InvalidStatus> {
        LeaveStatus::parse_filter(self.status.as_deref())
    }
}

/// Clamped page/limit pair and the row offset it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            0
        } else {
            (total_count + self.limit - 1) / self.limit
        }
    }
}

/// Envelope returned by `GET /api/leaves`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeavePage {
    pub leaves: Vec<Leave>,
    pub total_count: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub limit: i64,
}

impl LeavePage {
    pub fn new(leaves: Vec<Leave>, total_count: i64, window: PageWindow) -> Self {
        Self {
            leaves,
            total_count,
            current_page: window.page,
            total_pages: window.total_pages(total_count),
            limit: window.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_and_clamps() {
        assert_eq!(PageWindow::new(None, None), PageWindow { page: 1, limit: 10 });
        assert_eq!(PageWindow::new(Some(0), Some(0)), PageWindow { page: 1, limit: 1 });
        assert_eq!(PageWindow::new(Some(-4), Some(1000)).limit, 100);
    }

    #[test]
    fn offset_follows_page() {
        assert_eq!(PageWindow::new(Some(1), Some(10)).offset(), 0);
        assert_eq!(PageWindow::new(Some(2), Some(10)).offset(), 10);
        assert_eq!(PageWindow::new(Some(3), Some(25)).offset(), 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        let window = PageWindow::new(Some(2), Some(10));
        assert_eq!(window.total_pages(25), 3);
        assert_eq!(window.total_pages(20), 2);
        assert_eq!(window.total_pages(1), 1);
        assert_eq!(window.total_pages(0), 0);
    }

    #[test]
    fn envelope_uses_camel_case_keys() {
        let page = LeavePage::new(Vec::new(), 25, PageWindow::new(Some(2), None));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 25);
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["limit"], 10);
        assert!(json["leaves"].as_array().unwrap().is_empty());
    }

    #[test]
    fn query_status_filter_rejects_unknown_values() {
        let query = LeaveListQuery {
            status: Some("Archived".into()),
            ..Default::default()
        };
        assert!(query.status_filter().is_err());
    }
}
