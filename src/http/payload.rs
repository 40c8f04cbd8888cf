use crate::domain::model::ContactRequest;
use crate::http::response::{AppError, SUBMIT_FAILED};
use crate::utils::error::IntakeError;
use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

/// Contact form body, accepted as JSON or as a url-encoded form post.
pub struct ContactPayload(pub ContactRequest);

fn malformed(message: String) -> AppError {
    AppError::from_intake(IntakeError::MalformedPayload { message }, SUBMIT_FAILED)
}

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .to_ascii_lowercase()
                    .starts_with("application/x-www-form-urlencoded")
            })
            .unwrap_or(false);

        if is_form {
            let Form(body) = Form::<ContactRequest>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<ContactRequest>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(body))
        }
    }
}
