mod health;
pub mod router;
mod state;

pub use health::{HealthResponse, mark_started};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
