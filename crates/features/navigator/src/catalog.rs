use crate::error::NavigatorError;
use arcade_kernel::domain::catalog::DomainCatalogEntry;

/// The ordered, immutable set of training domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DomainCatalogEntry>,
}

impl Catalog {
    /// Wraps `entries` after checking the catalog invariants.
    ///
    /// # Errors
    /// Returns [`NavigatorError::InvalidCatalog`] when the catalog is empty, numbers are
    /// not exactly `1..=len` in order, ids repeat, or a domain has no pages.
    pub fn new(entries: Vec<DomainCatalogEntry>) -> Result<Self, NavigatorError> {
        if entries.is_empty() {
            return Err(invalid("catalog has no domains"));
        }

        for (index, entry) in entries.iter().enumerate() {
            let expected = u32::try_from(index + 1)
                .map_err(|_| invalid("catalog has more domains than addressable numbers"))?;
            if entry.number != expected {
                return Err(invalid(format!(
                    "domain '{}' has number {}, expected {expected}",
                    entry.id, entry.number
                )));
            }
            if entry.total_pages == 0 {
                return Err(invalid(format!("domain {} has no pages", entry.number)));
            }
            if entries[..index].iter().any(|earlier| earlier.id == entry.id) {
                return Err(invalid(format!("duplicate domain id '{}'", entry.id)));
            }
        }

        Ok(Self { entries })
    }

    /// The four Game Dev PD domains, checked like any other catalog.
    ///
    /// # Errors
    /// Returns [`NavigatorError::InvalidCatalog`] if the table breaks an invariant.
    pub fn builtin() -> Result<Self, NavigatorError> {
        Self::new(vec![
            DomainCatalogEntry::new(1, "Game Design Fundamentals", 38, ["1.1", "1.2", "1.3"]),
            DomainCatalogEntry::new(2, "Programming for Games", 39, ["2.1", "2.2", "2.3"]),
            DomainCatalogEntry::new(3, "Creative Assets and User Experience", 27, ["3.1", "3.2"]),
            DomainCatalogEntry::new(4, "Industry and Career Connections", 30, ["4.1", "4.2"]),
        ])
    }

    #[must_use]
    pub fn entries(&self) -> &[DomainCatalogEntry] {
        &self.entries
    }

    /// Exact-number lookup.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&DomainCatalogEntry> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.entries.get(index).filter(|entry| entry.number == number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> NavigatorError {
    NavigatorError::InvalidCatalog { message: message.into(), context: None }
}
