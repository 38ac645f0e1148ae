use std::sync::OnceLock;

use axum::extract::{FromRequest, Request};
use axum::Json;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::ErrorStatus;

/// One rejected field, reported with the wire-facing field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Boundary validation, run before any service code executes.
/// An empty result means the request is acceptable.
pub trait Validate {
    fn validate(&self) -> Vec<FieldViolation>;
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static ZIP_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("literal pattern"))
}

pub fn zip_pattern() -> &'static Regex {
    ZIP_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("literal pattern"))
}

/// Json extractor that rejects invalid payloads with the structured error
/// body instead of letting them reach a handler.
pub struct Valid<T>(pub T);

#[async_trait::async_trait]
impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ErrorStatus;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = req.uri().path().to_string();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ErrorStatus::Malformed {
                message: rejection.body_text(),
                uri: uri.clone(),
            })?;
        let violations = value.validate();
        if violations.is_empty() {
            Ok(Valid(value))
        } else {
            Err(ErrorStatus::Invalid { violations, uri })
        }
    }
}
