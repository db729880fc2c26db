use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let per_page = i64::from(limit.max(1));
        Self {
            page,
            limit,
            total,
            total_pages: (total + per_page - 1) / per_page,
        }
    }
}
