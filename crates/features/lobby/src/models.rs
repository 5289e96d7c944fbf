use arcade_derive::api_model;
use arcade_kernel::domain::catalog::{DomainCatalogEntry, PageView};

#[api_model]
/// A training domain as listed in the lobby
pub struct DomainSummary {
    /// Stable slug
    pub id: String,
    /// Domain number used in page URLs
    pub number: u32,
    pub title: String,
    pub total_pages: u32,
    /// Standard codes covered by the domain
    pub standards: Vec<String>,
}

#[api_model]
/// A resolved page with navigation state
pub struct PageResponse {
    pub domain_num: u32,
    pub page_num: u32,
    pub domain_title: String,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    /// Previous page number, when one exists
    pub prev_page: Option<u32>,
    /// Next page number, when one exists
    pub next_page: Option<u32>,
    /// Position through the domain, 0-100
    pub progress_percent: u32,
}

impl From<&DomainCatalogEntry> for DomainSummary {
    fn from(entry: &DomainCatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            number: entry.number,
            title: entry.title.clone(),
            total_pages: entry.total_pages,
            standards: entry.standards.clone(),
        }
    }
}

impl From<PageView> for PageResponse {
    fn from(view: PageView) -> Self {
        Self {
            prev_page: view.prev_page(),
            next_page: view.next_page(),
            progress_percent: view.progress_percent(),
            domain_num: view.domain_num,
            page_num: view.page_num,
            domain_title: view.domain_title,
            total_pages: view.total_pages,
            has_prev: view.has_prev,
            has_next: view.has_next,
        }
    }
}
