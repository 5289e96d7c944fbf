//! # Navigator
//!
//! Validates `(domain, page)` addresses against the static training catalog and
//! computes previous/next availability. Every query is a pure function of its
//! arguments and the catalog, so the slice is shared across handlers without locks.
//!
//! ```rust
//! use arcade_navigator::{Navigator, NotFoundReason};
//!
//! let navigator = Navigator::builtin().unwrap();
//! let view = navigator.resolve_page(1, 1).unwrap();
//! assert!(!view.has_prev && view.has_next);
//!
//! let err = navigator.resolve_page(1, 39).unwrap_err();
//! assert_eq!(err.not_found_reason(), Some(NotFoundReason::Page));
//! ```

mod catalog;
mod error;

pub use catalog::Catalog;
pub use error::{NavigatorError, NavigatorErrorExt, NotFoundReason};

use arcade_kernel::domain::catalog::{DomainCatalogEntry, PageAddress, PageView};
use arcade_kernel::domain::registry::InitializedSlice;

/// Navigator feature state.
#[arcade_derive::arcade_slice]
pub struct Navigator {
    catalog: Catalog,
}

impl Navigator {
    /// A navigator over the built-in Game Dev PD catalog.
    ///
    /// # Errors
    /// Returns [`NavigatorError::InvalidCatalog`] if the built-in table breaks an invariant.
    pub fn builtin() -> Result<Self, NavigatorError> {
        Catalog::builtin().map(Self::with_catalog)
    }

    /// A navigator over `catalog`, which [`Catalog::new`] has already validated.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(NavigatorInner { catalog })
    }

    /// All domains, ordered by number.
    #[must_use]
    pub fn list_domains(&self) -> &[DomainCatalogEntry] {
        self.catalog.entries()
    }

    #[must_use]
    pub fn domain(&self, domain_num: u32) -> Option<&DomainCatalogEntry> {
        self.catalog.get(domain_num)
    }

    /// Resolves a page address into a renderable view.
    ///
    /// # Errors
    /// Returns [`NavigatorError::NotFound`] with [`NotFoundReason::Domain`] when no
    /// domain has number `domain_num`, or [`NotFoundReason::Page`] when `page_num`
    /// is outside `1..=total_pages`.
    pub fn resolve_page(&self, domain_num: u32, page_num: u32) -> Result<PageView, NavigatorError> {
        let not_found =
            |reason| NavigatorError::NotFound { reason, domain_num, page_num, context: None };

        let domain =
            self.catalog.get(domain_num).ok_or_else(|| not_found(NotFoundReason::Domain))?;
        if !domain.contains_page(page_num) {
            return Err(not_found(NotFoundReason::Page));
        }

        Ok(PageView {
            domain_num,
            page_num,
            domain_title: domain.title.clone(),
            total_pages: domain.total_pages,
            has_prev: page_num > 1,
            has_next: page_num < domain.total_pages,
        })
    }

    /// [`Self::resolve_page`] for a [`PageAddress`].
    ///
    /// # Errors
    /// Same as [`Self::resolve_page`].
    pub fn resolve(&self, address: PageAddress) -> Result<PageView, NavigatorError> {
        self.resolve_page(address.domain_num, address.page_num)
    }
}

/// Initialize the navigator feature with the built-in catalog.
///
/// # Errors
/// Returns [`NavigatorError::InvalidCatalog`] if the built-in catalog breaks an invariant.
pub fn init() -> Result<InitializedSlice, NavigatorError> {
    let navigator = Navigator::builtin().context("Validating built-in catalog")?;

    tracing::info!(domains = navigator.list_domains().len(), "Navigator slice initialized");

    Ok(InitializedSlice::new(navigator))
}
