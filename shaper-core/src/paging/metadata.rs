use serde::{Deserialize, Serialize};

/// Which page a navigation link should point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUriType {
    PreviousPage,
    NextPage,
    Current,
}

impl ResourceUriType {
    /// Page number the link targets, relative to `current`.
    pub fn page_number(self, current: u32) -> u32 {
        match self {
            ResourceUriType::PreviousPage => current.saturating_sub(1),
            ResourceUriType::NextPage => current.saturating_add(1),
            ResourceUriType::Current => current,
        }
    }
}

/// Page counts and navigation links reported alongside a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: usize,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_link: Option<String>,
}

impl PaginationMetadata {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    /// Fills in the previous and next links, each only when that page
    /// exists. `link` builds the URI for a given direction.
    pub fn with_links(mut self, mut link: impl FnMut(ResourceUriType) -> String) -> Self {
        self.previous_page_link = self
            .has_previous()
            .then(|| link(ResourceUriType::PreviousPage));
        self.next_page_link = self.has_next().then(|| link(ResourceUriType::NextPage));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(current_page: u32, total_pages: usize) -> PaginationMetadata {
        PaginationMetadata {
            total_count: total_pages * 10,
            page_size: 10,
            current_page,
            total_pages,
            previous_page_link: None,
            next_page_link: None,
        }
    }

    #[test]
    fn links_only_for_existing_pages() {
        let link = |kind: ResourceUriType| format!("/authors?pageNumber={}", kind.page_number(2));

        let middle = metadata(2, 3).with_links(link);
        assert_eq!(middle.previous_page_link.as_deref(), Some("/authors?pageNumber=1"));
        assert_eq!(middle.next_page_link.as_deref(), Some("/authors?pageNumber=3"));

        let first = metadata(1, 3).with_links(link);
        assert!(first.previous_page_link.is_none());
        assert!(first.next_page_link.is_some());
    }

    #[test]
    fn absent_links_are_omitted_from_json() {
        let json = serde_json::to_value(metadata(1, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalCount": 10,
                "pageSize": 10,
                "currentPage": 1,
                "totalPages": 1,
            })
        );
    }
}
