use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Appointment, AppointmentDraft};

// ============================================================================
// Endpoints
// ============================================================================

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// The REST surface exposed by the appointments backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    List,
    Add,
    Update(&'a str),
    Delete(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Self::List => Method::Get,
            Self::Add | Self::Update(_) => Method::Post,
            Self::Delete(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/appointments".to_string(),
            Self::Add => "/appointments/add".to_string(),
            Self::Update(id) => format!("/appointments/update/{}", urlencoding::encode(id)),
            Self::Delete(id) => format!("/appointments/delete/{}", urlencoding::encode(id)),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Interprets the body of an update or delete response.
///
/// Backends answer these with anything from a JSON document to a bare
/// sentence, so non-JSON text is kept as a JSON string.
pub fn parse_confirmation(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

// ============================================================================
// Client seam
// ============================================================================

/// Remote data client for appointments.
///
/// Futures are not required to be `Send` so browser fetch implementations
/// qualify. No implementation retries, times out or cancels.
#[async_trait(?Send)]
pub trait AppointmentApi {
    /// `GET /appointments`
    async fn list_appointments(&self) -> ApiResult<Vec<Appointment>>;

    /// `POST /appointments/add`, returning the created record with its `_id`
    async fn create_appointment(&self, draft: &AppointmentDraft) -> ApiResult<Appointment>;

    /// `POST /appointments/update/{id}`, returning the confirmation payload
    async fn update_appointment(&self, id: &str, fields: &AppointmentDraft) -> ApiResult<Value>;

    /// `DELETE /appointments/delete/{id}`, returning the confirmation payload
    async fn delete_appointment(&self, id: &str) -> ApiResult<Value>;
}
