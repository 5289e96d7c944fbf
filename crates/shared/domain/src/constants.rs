//! Shared string constants.

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for catalog endpoints.
pub const CATALOG_TAG: &str = "Catalog";

/// Environment variable prefix for configuration overrides (`ARCADE__SERVER__PORT`).
pub const ENV_PREFIX: &str = "ARCADE";
/// Configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

pub const DOMAIN_NOT_FOUND: &str = "Domain not found";
pub const PAGE_NOT_FOUND: &str = "Page not found";
/// Body for addresses whose segments are not page numbers at all.
pub const NOT_FOUND: &str = "Not found";
