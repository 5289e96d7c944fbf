//! Training catalog and page navigation values.

use serde::{Deserialize, Serialize};

/// One training domain: a fixed run of sequential pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCatalogEntry {
    /// Stable slug, e.g. `domain1`.
    pub id: String,
    /// 1-based position in the catalog; also the number used in page URLs.
    pub number: u32,
    pub title: String,
    pub total_pages: u32,
    /// Standard codes covered by the domain, in display order.
    pub standards: Vec<String>,
}

impl DomainCatalogEntry {
    pub fn new<I, S>(
        number: u32,
        title: impl Into<String>,
        total_pages: u32,
        standards: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: format!("domain{number}"),
            number,
            title: title.into(),
            total_pages,
            standards: standards.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `page_num` lies within `1..=total_pages`.
    #[must_use]
    pub const fn contains_page(&self, page_num: u32) -> bool {
        page_num >= 1 && page_num <= self.total_pages
    }
}

/// A requested (domain, page) pair, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageAddress {
    pub domain_num: u32,
    pub page_num: u32,
}

impl PageAddress {
    #[must_use]
    pub const fn new(domain_num: u32, page_num: u32) -> Self {
        Self { domain_num, page_num }
    }
}

/// A resolved page, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub domain_num: u32,
    pub page_num: u32,
    pub domain_title: String,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageView {
    #[must_use]
    pub const fn address(&self) -> PageAddress {
        PageAddress::new(self.domain_num, self.page_num)
    }

    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        if self.has_prev { Some(self.page_num - 1) } else { None }
    }

    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next { Some(self.page_num + 1) } else { None }
    }

    /// Position through the domain as a whole percentage, rounded half up.
    #[must_use]
    pub const fn progress_percent(&self) -> u32 {
        if self.total_pages == 0 {
            return 0;
        }
        let scaled = self.page_num as u64 * 200 + self.total_pages as u64;
        #[allow(clippy::cast_possible_truncation)]
        let percent = (scaled / (self.total_pages as u64 * 2)) as u32;
        percent
    }
}
