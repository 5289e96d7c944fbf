use arcade_kernel::domain::constants::{DOMAIN_NOT_FOUND, PAGE_NOT_FOUND};
use std::borrow::Cow;
use std::fmt;

/// Which half of a page address failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundReason {
    /// No catalog entry carries the requested domain number.
    Domain,
    /// The page number is outside `1..=total_pages` of an existing domain.
    Page,
}

impl NotFoundReason {
    /// User-facing message for 404 responses.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Domain => DOMAIN_NOT_FOUND,
            Self::Page => PAGE_NOT_FOUND,
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "domain",
            Self::Page => "page",
        })
    }
}

/// Navigator error type.
#[arcade_derive::arcade_error]
#[derive(Clone, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("Not found ({reason}){}: domain {domain_num}, page {page_num}", format_context(.context))]
    NotFound {
        reason: NotFoundReason,
        domain_num: u32,
        page_num: u32,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid catalog{}: {message}", format_context(.context))]
    InvalidCatalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl NavigatorError {
    /// The not-found reason, if this is a lookup miss.
    #[must_use]
    pub const fn not_found_reason(&self) -> Option<NotFoundReason> {
        match self {
            Self::NotFound { reason, .. } => Some(*reason),
            Self::InvalidCatalog { .. } => None,
        }
    }
}
