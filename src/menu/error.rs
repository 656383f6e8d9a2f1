//! Menu errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error("dish name must not be empty")]
    InvalidDishName,

    #[error("price must be greater than zero and at most 999999999.99, got {0}")]
    InvalidPrice(Decimal),

    #[error("unknown course '{0}', expected Starter, Main, Dessert or Beverage")]
    UnknownCourse(String),

    #[error("no dish with id '{0}'")]
    DishNotFound(String),
}

impl MenuError {
    /// Stable snake_case code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::InvalidDishName => "invalid_dish_name",
            MenuError::InvalidPrice(_) => "invalid_price",
            MenuError::UnknownCourse(_) => "unknown_course",
            MenuError::DishNotFound(_) => "dish_not_found",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            MenuError::DishNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body returned for a failed REST call
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl From<&MenuError> for ErrorBody {
    fn from(err: &MenuError) -> Self {
        Self {
            error: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = MenuError::DishNotFound("42".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "dish_not_found");
        assert_eq!(err.to_string(), "no dish with id '42'");
    }

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(MenuError::InvalidDishName.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            MenuError::InvalidPrice(Decimal::ZERO).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MenuError::UnknownCourse("Brunch".into()).code(),
            "unknown_course"
        );
    }
}
