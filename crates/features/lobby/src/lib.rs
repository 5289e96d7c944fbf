//! # Lobby
//!
//! Presentation slice: renders the Navigator's catalog and page views as HTML,
//! maps navigation misses to `404` plain-text responses, and exposes the same
//! data as a small JSON API.
//!
//! The slice only reads the Navigator through `list_domains` and `resolve_page`.

mod models;
pub mod views;

#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod http;

#[cfg(feature = "server")]
pub use error::{LobbyError, LobbyErrorExt};
#[cfg(feature = "server")]
pub use http::{api_router, site_router};
pub use models::{DomainSummary, PageResponse};

use arcade_kernel::domain::config::LobbyConfig;
use arcade_kernel::domain::registry::InitializedSlice;

/// Lobby feature state: rendering settings resolved once at startup.
#[arcade_derive::arcade_slice]
pub struct Lobby {
    /// Site title shown in headings and `<title>`.
    pub title: String,
    /// Normalized mount path (`""` or `/prefix`).
    pub mount: String,
}

/// Initialize the lobby feature.
#[must_use]
pub fn init(config: &LobbyConfig) -> InitializedSlice {
    let mount = config.mount();
    tracing::info!(mount = %views::lobby_href(&mount), "Lobby slice initialized");

    InitializedSlice::new(Lobby::new(LobbyInner { title: config.title.clone(), mount }))
}

/// Parses one page-address segment the way an integer route converter would.
///
/// Only ASCII digits are accepted (no sign, no whitespace). Digit strings too large
/// for `u32` saturate to `u32::MAX`, which never names a domain or page, so they
/// still resolve to a not-found reason rather than a malformed address.
#[must_use]
pub fn parse_page_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().unwrap_or(u32::MAX))
}
