use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned for every lookup that matches no item
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Message returned when a create request lacks a name or description
pub const NAME_AND_DESCRIPTION_REQUIRED: &str = "Name and description are required";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ItemError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ItemError::Validation(NAME_AND_DESCRIPTION_REQUIRED.to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ItemError::Internal("store unavailable".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
