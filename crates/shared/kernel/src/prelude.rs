pub use crate::config::{ConfigError, load_config};
pub use arcade_domain::catalog::{DomainCatalogEntry, PageAddress, PageView};
pub use arcade_domain::config::ApiConfig;
pub use arcade_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
