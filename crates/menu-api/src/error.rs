use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use menu_core::MenuError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Menu configuration error: {0}")]
    ConfigurationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::MenuNotFound(name) => ApiError::NotFound(format!("menu '{}'", name)),
            MenuError::ValidationError(msg) => ApiError::BadRequest(msg),
            MenuError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            other if other.is_configuration_defect() => {
                ApiError::ConfigurationError(other.to_string())
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::InternalError(format!("menu rendering failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            },
            ApiError::ConfigurationError(msg) => {
                tracing::error!("Menu configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "MENU_CONFIGURATION_ERROR", msg)
            },
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", msg)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            },
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_menu_errors_map_to_api_errors() {
        assert!(matches!(
            ApiError::from(MenuError::UnresolvedRoute("x".to_string())),
            ApiError::ConfigurationError(_)
        ));
        assert!(matches!(
            ApiError::from(MenuError::CyclicParent { item_id: Uuid::new_v4() }),
            ApiError::ConfigurationError(_)
        ));
        assert!(matches!(
            ApiError::from(MenuError::DatabaseError("down".to_string())),
            ApiError::DatabaseError(_)
        ));
        assert!(matches!(
            ApiError::from(MenuError::MenuNotFound("main".to_string())),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_configuration_error_is_server_error() {
        let response = ApiError::ConfigurationError("bad route".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
