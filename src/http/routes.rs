use crate::core::catalog;
use crate::http::payload::ContactPayload;
use crate::http::response::{
    AppError, ContactResponse, HealthResponse, InquiriesResponse, ProjectsResponse, LIST_FAILED,
    SUBMIT_FAILED, SUBMIT_OK,
};
use crate::http::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    ContactPayload(request): ContactPayload,
) -> Result<Json<ContactResponse>, AppError> {
    let outcome = state
        .service
        .submit(request)
        .await
        .map_err(|e| AppError::from_intake(e, SUBMIT_FAILED))?;
    tracing::debug!(id = %outcome.inquiry.id, notification = ?outcome.notification, "Submission handled");

    Ok(Json(ContactResponse {
        success: true,
        message: SUBMIT_OK,
        inquiry_id: outcome.inquiry.id,
    }))
}

pub async fn projects_handler(Path(category): Path<String>) -> Json<ProjectsResponse> {
    let projects = catalog::projects_for(&category);
    tracing::debug!("Catalog lookup '{}' -> {} projects", category, projects.len());

    Json(ProjectsResponse {
        success: true,
        projects,
    })
}

pub async fn inquiries_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InquiriesResponse>, AppError> {
    let inquiries = state.service.store().list_all().await.map_err(|e| {
        tracing::error!("❌ Error reading inquiries: {}", e);
        AppError::from_intake(e, LIST_FAILED)
    })?;

    Ok(Json(InquiriesResponse {
        success: true,
        inquiries,
    }))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        email_configured: state.email_configured,
    })
}
