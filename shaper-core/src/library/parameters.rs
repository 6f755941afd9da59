use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paging::PageRequest;

pub const DEFAULT_ORDER_BY: &str = "Name";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 20;

/// Page size bounds applied to author listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Query parameters accepted by the author listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorsResourceParameters {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub order_by: String,
    pub page_number: i64,
    pub page_size: Option<i64>,
    pub fields: Option<String>,
}

impl Default for AuthorsResourceParameters {
    fn default() -> Self {
        Self {
            main_category: None,
            search_query: None,
            order_by: DEFAULT_ORDER_BY.to_string(),
            page_number: 1,
            page_size: None,
            fields: None,
        }
    }
}

impl AuthorsResourceParameters {
    /// Requested page size, falling back to the default and capped at the
    /// maximum.
    pub fn effective_page_size(&self, limits: PageLimits) -> i64 {
        self.page_size
            .unwrap_or(i64::from(limits.default_page_size))
            .min(i64::from(limits.max_page_size))
    }

    pub fn page_request(&self, limits: PageLimits) -> Result<PageRequest> {
        PageRequest::new(self.page_number, self.effective_page_size(limits))
    }

    /// Trimmed main category filter, if one was given.
    pub fn main_category_filter(&self) -> Option<&str> {
        non_blank(self.main_category.as_deref())
    }

    /// Trimmed search text, if one was given.
    pub fn search_filter(&self) -> Option<&str> {
        non_blank(self.search_query.as_deref())
    }

    pub fn fields(&self) -> &str {
        self.fields.as_deref().unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
