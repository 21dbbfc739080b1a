use serde::{Deserialize, Serialize};

/// Largest page the loyalty API serves in one request.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
/// Pagination query shared by every list endpoint (`?page=&limit=`).
/// Pages are 1-based.
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Same bounds the loyalty API enforces: `page >= 1`, `1 <= limit <= 100`.
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page debe ser mayor o igual a 1".to_string());
        }
        if self.limit < 1 || self.limit > MAX_PAGE_SIZE {
            return Err(format!("limit debe estar entre 1 y {}", MAX_PAGE_SIZE));
        }
        Ok(())
    }

    pub fn to_query_string(&self) -> String {
        format!("page={}&limit={}", self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_bounds() {
        assert!(PageQuery::new(1, 20).validate().is_ok());
        assert!(PageQuery::new(0, 20).validate().is_err());
        assert!(PageQuery::new(1, 0).validate().is_err());
        assert!(PageQuery::new(1, 101).validate().is_err());
        assert!(PageQuery::new(3, MAX_PAGE_SIZE).validate().is_ok());
    }

    #[test]
    fn renders_query_string() {
        assert_eq!(PageQuery::new(2, 10).to_query_string(), "page=2&limit=10");
        assert_eq!(PageQuery::default().to_query_string(), "page=1&limit=10");
    }
}
