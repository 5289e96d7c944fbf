//! Facade crate for the arcade feature slices and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `arcade` with the `server` feature flag.
//! - Call `arcade::init` (server) to register feature slices; extend as new slices appear.

pub use arcade_domain as domain;
use arcade_domain::config::ApiConfig;
pub use arcade_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use arcade_kernel::server::router::system_router;
        pub use arcade_lobby::{api_router, site_router};
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use arcade_lobby as lobby;
    pub use arcade_navigator as navigator;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "navigator",
        "lobby",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// The navigator comes first: the lobby only renders what it resolves.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Navigator
    slices.push(features::navigator::init()?);

    // Lobby
    slices.push(features::lobby::init(&config.lobby));

    Ok(slices)
}
