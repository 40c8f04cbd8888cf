use crate::domain::model::{Inquiry, NewInquiry};
use crate::domain::ports::InquiryRepository;
use crate::utils::error::{IntakeError, Result};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub const INQUIRIES_FILE: &str = "inquiries.json";

/// Inquiry collection kept as one pretty-printed JSON array on disk.
///
/// Appends are serialised through `last_id`'s mutex, so the read-modify-write
/// cycle never interleaves within a process. Writes go to a sibling temp file
/// that is renamed over the document, leaving the old document intact if the
/// write fails.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    last_id: Mutex<u64>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_id: Mutex::new(0),
        }
    }

    /// Store rooted in `data_dir`, creating the directory when it is missing.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| IntakeError::Persistence {
            message: format!("cannot create data directory {}: {}", data_dir.display(), e),
        })?;
        Ok(Self::new(data_dir.join(INQUIRIES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records as stored. Appends work on these so earlier entries are
    /// written back exactly as they were read.
    async fn read_document(&self) -> Result<Vec<Value>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(IntakeError::Persistence {
                    message: format!("cannot read {}: {}", self.path.display(), e),
                })
            }
        };

        let records = serde_json::from_slice(&content)?;
        Ok(records)
    }

    async fn write_document(&self, records: &[Value]) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");

        let written = async {
            tokio::fs::write(&tmp_path, &data).await?;
            tokio::fs::rename(&tmp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                tracing::debug!("Temp file {} not removed: {}", tmp_path.display(), cleanup);
            }
            return Err(IntakeError::Persistence {
                message: format!("cannot write {}: {}", self.path.display(), e),
            });
        }
        Ok(())
    }
}

/// Numeric value of a stored id, whether it was written as a string or a number.
fn stored_id(record: &Value) -> Option<u64> {
    match record.get("id")? {
        Value::String(id) => id.parse().ok(),
        Value::Number(id) => id.as_u64(),
        _ => None,
    }
}

/// Millisecond clock value, bumped past `last` so ids stay unique and increasing.
fn next_id(now_millis: u64, last: u64) -> u64 {
    if now_millis > last {
        now_millis
    } else {
        last + 1
    }
}

#[async_trait]
impl InquiryRepository for JsonFileStore {
    async fn append(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        let mut last_id = self.last_id.lock().await;

        let mut records = self.read_document().await?;

        // ids already on disk win over the in-memory counter after a restart
        let stored_max = records.iter().filter_map(stored_id).max().unwrap_or(0);

        let now = Utc::now();
        let id = next_id(now.timestamp_millis().max(0) as u64, (*last_id).max(stored_max));
        let record = Inquiry::new(
            id.to_string(),
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
            inquiry,
        );

        records.push(serde_json::to_value(&record)?);
        self.write_document(&records).await?;
        *last_id = id;

        tracing::debug!("Inquiry document now holds {} records", records.len());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<Inquiry>> {
        self.read_document()
            .await?
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(IntakeError::from))
            .collect()
    }
}
