use crate::{TaskSort, fold_search};

/// Search, sort and paging options for a column's task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// Trimmed and folded with [`fold_search`].
    pub search: Option<String>,
    pub sort: TaskSort,
    /// One-based page number.
    pub page: u32,
    pub limit: u32,
}

impl TaskQuery {
    pub fn new(search: Option<String>, sort: TaskSort, page: u32, limit: u32) -> Self {
        let search = search
            .map(|s| fold_search(s.trim()))
            .filter(|s| !s.is_empty());
        Self {
            search,
            sort,
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}
