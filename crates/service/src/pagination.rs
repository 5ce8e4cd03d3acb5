//! Pagination utilities for service layer
//!
//! `ListParams` is the raw query string of a listing request; `Pagination`
//! is the resolved, clamped page window.
use configs::PaginationConfig;
use sea_orm::Order;
use serde::Deserialize;

/// Listing query parameters: `?page=&per_page=&sort_by=&order=&search=`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// `desc` (any case) sorts descending, anything else ascending.
    pub fn order(&self) -> Order {
        match self.order.as_deref() {
            Some(o) if o.eq_ignore_ascii_case("desc") => Order::Desc,
            _ => Order::Asc,
        }
    }

    /// Non-blank search term, trimmed.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    /// Resolve request values against the configured limits.
    pub fn resolve(params: &ListParams, limits: &PaginationConfig) -> Self {
        let page = params.page.filter(|p| *p > 0).unwrap_or(1);
        let per_page = params
            .per_page
            .unwrap_or(limits.default_per_page)
            .clamp(1, limits.max_per_page.max(1));
        Self { page, per_page }
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 10 } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> PaginationConfig {
        PaginationConfig { default_per_page: 10, max_per_page: 100 }
    }

    #[test]
    fn resolve_clamps_zero_to_defaults() {
        let p = Pagination::resolve(&ListParams { page: Some(0), per_page: Some(0), ..Default::default() }, &limits());
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn resolve_clamps_upper_bound() {
        let p = Pagination::resolve(&ListParams { page: Some(5), per_page: Some(1000), ..Default::default() }, &limits());
        assert_eq!(p.page_index(), 4);
        assert_eq!(p.per_page, 100);
    }

    #[test]
    fn missing_values_use_configured_defaults() {
        let p = Pagination::resolve(&ListParams::default(), &PaginationConfig { default_per_page: 25, max_per_page: 50 });
        assert_eq!(p, Pagination { page: 1, per_page: 25 });
    }

    #[test]
    fn order_parsing() {
        let mut params = ListParams { order: Some("DESC".into()), ..Default::default() };
        assert_eq!(params.order(), Order::Desc);
        params.order = Some("sideways".into());
        assert_eq!(params.order(), Order::Asc);
    }

    #[test]
    fn blank_search_is_ignored() {
        let params = ListParams { search: Some("   ".into()), ..Default::default() };
        assert_eq!(params.search_term(), None);
    }
}
