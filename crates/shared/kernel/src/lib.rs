//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus, behind `server`,
//! the Axum application state and the system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use arcade_kernel::config::load_config;
//! use arcade_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! # let _ = cfg;
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use arcade_domain as domain;
