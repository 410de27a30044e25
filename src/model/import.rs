use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome counters of one importer run.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ImportReportDto {
    pub resource: String,
    pub fetched: u64,
    pub created: u64,
    pub updated: u64,
    /// Records left out, including those with unresolved references.
    pub skipped: u64,
    /// Records skipped because a referenced row does not exist locally.
    pub missed_fk: u64,
    pub failed: u64,
    /// First few per-record error messages.
    pub sample_errors: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImportStateDto {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Current status of an importer as tracked by the job registry.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ImportJobDto {
    pub importer: String,
    pub state: ImportStateDto,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub last_report: Option<ImportReportDto>,
    pub last_error: Option<String>,
}

/// Response of a refresh trigger.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ImportStartedDto {
    pub importers: Vec<String>,
    pub source: String,
}
