use crate::domain::model::{CatalogEntry, Inquiry};
use crate::utils::error::IntakeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const SUBMIT_OK: &str = "Inquiry submitted successfully";
pub const SUBMIT_FAILED: &str = "Failed to submit inquiry";
pub const LIST_FAILED: &str = "Failed to retrieve inquiries";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub inquiry_id: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub success: bool,
    pub projects: &'static [CatalogEntry],
}

#[derive(Debug, Serialize)]
pub struct InquiriesResponse {
    pub success: bool,
    pub inquiries: Vec<Inquiry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub email_configured: bool,
}

#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(&'static str),
}

impl AppError {
    /// Client-side problems keep their detail; everything else becomes `fallback`.
    pub fn from_intake(err: IntakeError, fallback: &'static str) -> Self {
        match err {
            IntakeError::Validation { field, message } => {
                AppError::BadRequest(format!("Field '{}' {}", field, message))
            }
            IntakeError::MalformedPayload { message } => {
                AppError::BadRequest(format!("Invalid request body: {}", message))
            }
            _ => AppError::Internal(fallback),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = FailureBody {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
