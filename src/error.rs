use axum::http::StatusCode;
use tracing::error;
use uuid::Uuid;

/// Errors surfaced by the shopping-list services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} {id} is referenced but does not exist")]
    InvalidReference { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("store failure")]
    StoreFailure(#[source] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_reference(entity: &'static str, id: Uuid) -> Self {
        Self::InvalidReference { entity, id }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::StoreFailure(e)
    }
}

impl From<AppError> for (StatusCode, String) {
    fn from(e: AppError) -> Self {
        if let AppError::StoreFailure(source) = &e {
            error!(error = ?source, "store failure");
        }
        (e.status(), e.to_string())
    }
}
