use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::{BusinessRuleError, DomainError, IntegrityViolation};
use crate::messages::ErrorCode;

/// One offending element of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    pub code: String,
    pub description: String,
}

impl ErrorDetail {
    pub fn field(element: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            element: Some(element.into()),
            code: code.code().to_string(),
            description: code.describe(),
        }
    }
}

/// Envelope shared by every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    Validation(Vec<ErrorDetail>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Business rule violated: {0}")]
    BusinessRule(BusinessRuleError),

    #[error("Data integrity violation: {message}")]
    DataIntegrity {
        kind: IntegrityViolation,
        message: String,
    },

    #[error("Not found")]
    NotFound,

    #[error("Catalogue unavailable: {0}")]
    CatalogueUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::BusinessRule(rule) => AppError::BusinessRule(rule),
            DomainError::DataIntegrity { kind, message } => AppError::DataIntegrity { kind, message },
            DomainError::InvalidId(value) => AppError::InvalidParameter {
                name: "id".to_string(),
                value,
            },
            e @ DomainError::CatalogueUnavailable(_) => AppError::CatalogueUnavailable(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::MalformedBody(_)
            | AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::BusinessRule(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DataIntegrity { .. } => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::CatalogueUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never carries internal diagnostics.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Validation error".to_string(),
            AppError::MalformedBody(_) => "The request format is incorrect".to_string(),
            AppError::InvalidParameter { name, .. } => {
                format!("The parameter '{}' has an incorrect type", name)
            }
            AppError::BusinessRule(_) => "Business rule validation error".to_string(),
            AppError::DataIntegrity { kind, .. } => kind.code().describe(),
            AppError::NotFound => "Order not found".to_string(),
            AppError::CatalogueUnavailable(_) => ErrorCode::CatalogueUnavailable.describe(),
            AppError::Internal(_) => ErrorCode::Unexpected.describe(),
        }
    }

    fn details(&self) -> Option<Vec<ErrorDetail>> {
        match self {
            AppError::Validation(details) => Some(details.clone()),
            AppError::BusinessRule(rule) => Some(vec![ErrorDetail {
                element: Some("bookId".to_string()),
                code: rule.code().code().to_string(),
                description: rule.description(),
            }]),
            _ => None,
        }
    }

    /// Binds the error to the request it answers.
    pub fn at(self, req: &HttpRequest) -> ApiError {
        ApiError {
            error: self,
            path: req.path().to_string(),
        }
    }
}

/// An [`AppError`] together with the request path, rendered as [`ErrorResponse`].
#[derive(Debug, Error)]
#[error("{error} at {path}")]
pub struct ApiError {
    pub error: AppError,
    pub path: String,
}

impl ApiError {
    pub fn body(&self) -> ErrorResponse {
        let status = self.error.status();
        ErrorResponse {
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: self.error.public_message(),
            path: self.path.clone(),
            details: self.error.details(),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.error.status()
    }

    fn error_response(&self) -> HttpResponse {
        match &self.error {
            AppError::Internal(_) | AppError::CatalogueUnavailable(_) => {
                log::error!("Unexpected error on {}: {}", self.path, self.error)
            }
            AppError::NotFound => log::info!("{}", self),
            _ => log::error!("{}", self),
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    fn api(error: AppError) -> ApiError {
        ApiError {
            error,
            path: "/orders".to_string(),
        }
    }

    #[test]
    fn each_kind_maps_to_one_status() {
        let cases = [
            (AppError::Validation(vec![]), StatusCode::BAD_REQUEST),
            (AppError::MalformedBody("eof".into()), StatusCode::BAD_REQUEST),
            (
                AppError::BusinessRule(BusinessRuleError::BookNotFound(1)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::DataIntegrity {
                    kind: IntegrityViolation::Unique,
                    message: "dup".into(),
                },
                StatusCode::CONFLICT,
            ),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(api(error).error_response().status(), status);
        }
    }

    #[test]
    fn internal_error_hides_diagnostics() {
        let body = api(AppError::Internal("connection refused at 10.0.0.3".into())).body();

        assert_eq!(body.status, 500);
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.message, ErrorCode::Unexpected.describe());
        assert!(body.details.is_none());
    }

    #[test]
    fn business_rule_has_single_detail_naming_the_book() {
        let body = api(AppError::BusinessRule(BusinessRuleError::BookNotFound(99))).body();

        let details = body.details.expect("business errors carry details");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].code, "BOOK_NOT_FOUND");
        assert!(details[0].description.contains("99"));
        assert_eq!(body.error, "Unprocessable Entity");
    }

    #[test]
    fn data_integrity_message_follows_violation_kind() {
        let body = api(AppError::DataIntegrity {
            kind: IntegrityViolation::PrimaryKey,
            message: "orders_pkey".into(),
        })
        .body();

        assert_eq!(body.status, 409);
        assert_eq!(body.message, ErrorCode::DuplicateIdentifier.describe());
        assert!(body.details.is_none());
    }

    #[test]
    fn details_are_omitted_from_json_when_absent() {
        let json = serde_json::to_value(api(AppError::NotFound).body()).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["path"], "/orders");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn domain_invalid_id_maps_to_bad_request() {
        let app_err: AppError = DomainError::InvalidId("abc".to_string()).into();
        assert_eq!(app_err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            app_err.public_message(),
            "The parameter 'id' has an incorrect type"
        );
    }

    #[test]
    fn domain_catalogue_unavailable_maps_to_503() {
        let app_err: AppError = DomainError::CatalogueUnavailable(5).into();
        assert_eq!(app_err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn timestamp_has_millisecond_utc_format() {
        let body = api(AppError::NotFound).body();
        // e.g. 2024-01-31T10:15:30.123Z
        assert_eq!(body.timestamp.len(), 24);
        assert!(body.timestamp.ends_with('Z'));
    }
}
