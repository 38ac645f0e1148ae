use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};
use time::OffsetDateTime;

use crate::validate::FieldViolation;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Wire shape of a single error entry. Every failure returns a JSON array of
/// these, even when there is only one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    message: String,
    details: String,
    error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl ErrorDetails {
    fn new(message: impl Into<String>, uri: &str, error_code: impl Into<String>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            message: message.into(),
            details: format!("uri={uri}"),
            error_code: error_code.into(),
            field: None,
        }
    }

    fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field.to_string());
        self
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel {
        report: Report<KernelError>,
        uri: String,
    },
    Invalid {
        violations: Vec<FieldViolation>,
        uri: String,
    },
    Malformed {
        message: String,
        uri: String,
    },
}

impl ErrorStatus {
    pub fn kernel(report: Report<KernelError>, uri: impl Into<String>) -> Self {
        Self::Kernel {
            report,
            uri: uri.into(),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, entries) = match self {
            ErrorStatus::Kernel { report, uri } => match report.current_context() {
                KernelError::NotFound { entity, message } => (
                    StatusCode::NOT_FOUND,
                    vec![ErrorDetails::new(
                        message.as_str(),
                        &uri,
                        format!("{}_NOT_FOUND", entity.to_uppercase()),
                    )],
                ),
                KernelError::DuplicateEntry { message } => (
                    StatusCode::CONFLICT,
                    message
                        .split('\n')
                        .map(|line| ErrorDetails::new(line.trim(), &uri, "DUPLICATE_ENTRY"))
                        .collect(),
                ),
                KernelError::InvalidArgument { message } => (
                    StatusCode::BAD_REQUEST,
                    vec![ErrorDetails::new(message.as_str(), &uri, "INVALID_ARGUMENT")],
                ),
                KernelError::Unsupported { message } => (
                    StatusCode::NOT_IMPLEMENTED,
                    vec![ErrorDetails::new(message.as_str(), &uri, "NOT_IMPLEMENTED")],
                ),
                KernelError::Internal => {
                    tracing::error!("{report:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        vec![ErrorDetails::new(
                            report.current_context().to_string(),
                            &uri,
                            "INTERNAL_SERVER_ERROR",
                        )],
                    )
                }
            },
            ErrorStatus::Invalid { violations, uri } => (
                StatusCode::BAD_REQUEST,
                violations
                    .into_iter()
                    .map(|violation| {
                        ErrorDetails::new(
                            violation.message,
                            &uri,
                            "METHOD_ARGUMENT_NOT_VALID_ERROR",
                        )
                        .with_field(violation.field)
                    })
                    .collect(),
            ),
            ErrorStatus::Malformed { message, uri } => (
                StatusCode::BAD_REQUEST,
                vec![ErrorDetails::new(message, &uri, "BAD_REQUEST")],
            ),
        };
        (status, Json(entries)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;
    use serde_json::Value;

    use crate::validate::FieldViolation;

    use super::ErrorStatus;

    async fn body_of(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be json")
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_entity_code() {
        let report = Report::new(KernelError::not_found("Customer", "abc"));
        let response = ErrorStatus::kernel(report, "/api/v1/customer/abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["errorCode"], "CUSTOMER_NOT_FOUND");
        assert_eq!(entries[0]["message"], "Customer with id abc not found");
        assert_eq!(entries[0]["details"], "uri=/api/v1/customer/abc");
    }

    #[tokio::test]
    async fn duplicate_entry_splits_lines_into_entries() {
        let report = Report::new(KernelError::DuplicateEntry {
            message: "duplicate key value\nviolates unique constraint".to_string(),
        });
        let response = ErrorStatus::kernel(report, "/api/v1/customer").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_of(response).await;
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["errorCode"], "DUPLICATE_ENTRY");
        assert_eq!(entries[0]["message"], "duplicate key value");
        assert_eq!(entries[1]["message"], "violates unique constraint");
    }

    #[tokio::test]
    async fn validation_failure_reports_one_entry_per_field() {
        let response = ErrorStatus::Invalid {
            violations: vec![
                FieldViolation::new("firstName", "First name is required"),
                FieldViolation::new("email", "Email is invalid"),
            ],
            uri: "/api/v1/customer".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["errorCode"], "METHOD_ARGUMENT_NOT_VALID_ERROR");
        assert_eq!(entries[0]["field"], "firstName");
        assert_eq!(entries[1]["field"], "email");
        assert_eq!(entries[1]["message"], "Email is invalid");
    }

    #[tokio::test]
    async fn malformed_body_maps_to_400_bad_request() {
        let response = ErrorStatus::Malformed {
            message: "Expected value at line 1".to_string(),
            uri: "/api/v1/product".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        let entries = body.as_array().expect("array body");
        assert_eq!(entries[0]["errorCode"], "BAD_REQUEST");
        assert!(entries[0].get("field").is_none());
    }

    #[tokio::test]
    async fn unsupported_maps_to_501() {
        let report = Report::new(KernelError::Unsupported {
            message: "not implemented".to_string(),
        });
        let response = ErrorStatus::kernel(report, "/api/v1/category").into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

        let body = body_of(response).await;
        assert_eq!(body[0]["errorCode"], "NOT_IMPLEMENTED");
    }
}
