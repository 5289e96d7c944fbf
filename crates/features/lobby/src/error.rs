use arcade_kernel::domain::constants::NOT_FOUND;
use arcade_kernel::server::ApiStateError;
use arcade_navigator::NavigatorError;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::{debug, error};

/// Lobby error type.
#[arcade_derive::arcade_error]
pub enum LobbyError {
    #[error("Navigation error{}: {source}", format_context(.context))]
    Navigation { source: NavigatorError, context: Option<Cow<'static, str>> },

    /// A path segment that is not a page number at all (e.g. `/domain/x/page/1`).
    #[error("Malformed page address{}: {segment}", format_context(.context))]
    MalformedAddress { segment: String, context: Option<Cow<'static, str>> },

    #[error("State error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },
}

impl LobbyError {
    /// HTTP status and plain-text body for this error.
    #[must_use]
    pub fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Navigation { source, .. } => source.not_found_reason().map_or(
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
                |reason| (StatusCode::NOT_FOUND, reason.message()),
            ),
            Self::MalformedAddress { .. } => (StatusCode::NOT_FOUND, NOT_FOUND),
            Self::State { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl IntoResponse for LobbyError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            error!(kind = self.kind(), error = %self, "Lobby request failed");
        } else {
            debug!(kind = self.kind(), error = %self, "Lobby address not found");
        }

        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
    }
}
