use crate::utils::error::{NotificationError, Result};
use crate::utils::validation::require_text;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Contact form body as it arrives over the wire. Every field is optional here
/// so that a missing field is reported as a validation error, not a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub requirements: Option<String>,
}

/// A checked submission, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub requirements: String,
}

impl NewInquiry {
    pub fn from_request(request: ContactRequest) -> Result<Self> {
        let name = require_text("name", &request.name)?.to_string();
        let email = require_text("email", &request.email)?.to_string();
        let project_type = require_text("projectType", &request.project_type)?.to_string();
        let requirements = require_text("requirements", &request.requirements)?.to_string();

        Ok(Self {
            name,
            email,
            project_type,
            budget: request.budget,
            timeline: request.timeline,
            requirements,
        })
    }
}

/// One persisted contact request. Immutable once appended.
///
/// Reading is lenient: documents written before submissions were checked may
/// hold `null`, numbers or missing keys, and unknown keys are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_type: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeline: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub requirements: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

impl Inquiry {
    pub fn new(id: String, timestamp: String, fields: NewInquiry) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            project_type: fields.project_type,
            budget: fields.budget,
            timeline: fields.timeline,
            requirements: fields.requirements,
            timestamp,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub difficulty: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Sent,
    NotConfigured,
    Failed(NotificationError),
}

impl NotificationStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotificationStatus::Sent)
    }
}

/// Result of a successful submission: the record is durable, the notification may not be.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub inquiry: Inquiry,
    pub notification: NotificationStatus,
}
