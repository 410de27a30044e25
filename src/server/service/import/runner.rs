//! Shared record loop of the importers.

use std::{fmt::Display, future::Future};

use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    error::{import::ImportError, AppError},
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
};

/// An importer for one entity family.
///
/// The importer decodes nothing itself: `run` turns each JSON record into `Record` and
/// hands it over. A required reference that cannot be resolved is reported by
/// returning `ImportError::MissingReference`, which `run` handles according to
/// `FK_MISS`. Every other error is handled according to `FAILURE`.
pub trait RecordImporter {
    type Record: DeserializeOwned + Send;

    const KIND: ImportKind;
    const FAILURE: FailurePolicy;
    const FK_MISS: FkMissPolicy;

    /// Upserts one record, counting written rows in `report`.
    fn import_record(
        &self,
        record: Self::Record,
        report: &mut ImportReport,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Imports `records` with `importer`.
///
/// # Arguments
/// - `importer` - Importer to run
/// - `records` - Records as delivered by the source
///
/// # Returns
/// - `Ok(ImportReport)` - Counters of the run; under `Collect` this includes failures
/// - `Err(AppError)` - First record error of an `Abort` importer
pub async fn run<I>(importer: &I, records: Vec<Value>) -> Result<ImportReport, AppError>
where
    I: RecordImporter + Sync,
{
    let mut report = ImportReport::new(I::KIND);
    report.fetched = records.len() as u64;

    tracing::info!("Import '{}' started with {} records", I::KIND, report.fetched);

    for (index, value) in records.into_iter().enumerate() {
        let result = match serde_json::from_value::<I::Record>(value) {
            Ok(record) => importer.import_record(record, &mut report).await,
            Err(source) => Err(ImportError::Decode {
                kind: I::KIND,
                source,
            }
            .into()),
        };

        let Err(err) = result else {
            continue;
        };

        if I::FK_MISS == FkMissPolicy::Skip
            && matches!(
                err,
                AppError::ImportErr(ImportError::MissingReference { .. })
            )
        {
            tracing::debug!("Import '{}' skipped record {}: {}", I::KIND, index, err);
            report.record_missing_reference();
            continue;
        }

        match I::FAILURE {
            FailurePolicy::Abort => {
                tracing::error!("Import '{}' aborted at record {}: {}", I::KIND, index, err);
                return Err(err);
            }
            FailurePolicy::Collect => {
                tracing::warn!("Import '{}' failed record {}: {}", I::KIND, index, err);
                report.record_failure(format!("record {}: {}", index, err));
            }
        }
    }

    tracing::info!(
        "Import '{}' finished: fetched {}, created {}, updated {}, skipped {}, missed_fk {}, failed {}",
        I::KIND,
        report.fetched,
        report.created,
        report.updated,
        report.skipped,
        report.missed_fk,
        report.failed
    );

    Ok(report)
}

/// Turns an unresolved required reference into `MissingReference`.
pub fn required(
    id: Option<i32>,
    resource: &'static str,
    key: impl Display,
) -> Result<i32, ImportError> {
    id.ok_or_else(|| ImportError::MissingReference {
        resource,
        key: key.to_string(),
    })
}

/// Resolves an optional reference; an absent provider id resolves to `None`.
pub async fn optional<F, Fut>(id: Option<i64>, resolve: F) -> Result<Option<i32>, DbErr>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<Option<i32>, DbErr>>,
{
    match id {
        Some(id) => resolve(id).await,
        None => Ok(None),
    }
}

/// Renders one segment of a composite external key; absent values render empty.
pub fn key_part<T: Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_part_renders_absent_values_empty() {
        assert_eq!(key_part(Some(42)), "42");
        assert_eq!(key_part::<i32>(None), "");
    }

    #[test]
    fn required_reports_resource_and_key() {
        let err = required(None, "team", 33).unwrap_err();

        assert_eq!(err.to_string(), "Missing team with key 33");
        assert_eq!(required(Some(7), "team", 33).unwrap(), 7);
    }
}
