//! Absolute links handed back to clients, rooted at the configured public
//! URL.

use shaper_core::{ResourceUriType, library::AuthorsResourceParameters};
use url::Url;

/// `base` with its path extended by `path`.
///
/// A path prefix on the public URL is kept, so a server published under
/// `https://host/shaper` links to `https://host/shaper/api/...`.
pub fn resource_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}/{}", path.trim_start_matches('/')));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Link to another page of the author listing, carrying the current filter,
/// search, sort and field selection.
pub fn authors_page_link(
    base: &Url,
    params: &AuthorsResourceParameters,
    kind: ResourceUriType,
    current_page: u32,
    page_size: u32,
) -> String {
    let mut url = resource_url(base, "/api/authors");
    {
        let mut query = url.query_pairs_mut();
        if let Some(fields) = params.fields.as_deref().filter(|f| !f.trim().is_empty()) {
            query.append_pair("fields", fields);
        }
        query.append_pair("orderBy", &params.order_by);
        query.append_pair("pageNumber", &kind.page_number(current_page).to_string());
        query.append_pair("pageSize", &page_size.to_string());
        if let Some(category) = params.main_category_filter() {
            query.append_pair("mainCategory", category);
        }
        if let Some(search) = params.search_filter() {
            query.append_pair("searchQuery", search);
        }
    }
    url.into()
}
