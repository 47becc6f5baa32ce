//! The per-record decision: is it broken, and can it be repaired?
//!
//! A record is compared against the file its `uri` names and against the
//! location the project layout expects. If anything is off and the expected
//! file exists, one update is pushed that points the record at it.

use crate::commands::{FileOutcome, FileReport};
use crate::config::{ReconcileConfig, ReconcilePolicy};
use crate::error::Result;
use crate::locate::{expected_location, file_size, is_accessible};
use crate::model::{Comparison, ExpectedLocation, Field, FileRecord, FileType, FileUpdate};
use crate::service::SampleService;
use tracing::{debug, error, info, warn};

/// Check every record of one sample. A failing record is reported and the
/// rest still run.
pub fn check_files<S: SampleService>(
    service: &mut S,
    config: &ReconcileConfig,
    sample_id: u64,
    files: &[FileRecord],
) -> Vec<FileReport> {
    files
        .iter()
        .map(|record| {
            let outcome = match check_file(service, config, sample_id, record) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(sample_id, file_id = record.id, name = %record.name, "check failed: {}", e);
                    FileOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            FileReport {
                sample_id,
                file_id: record.id,
                name: record.name.clone(),
                outcome,
            }
        })
        .collect()
}

pub fn check_file<S: SampleService>(
    service: &mut S,
    config: &ReconcileConfig,
    sample_id: u64,
    record: &FileRecord,
) -> Result<FileOutcome> {
    if record.file_type == FileType::Other {
        debug!(file_id = record.id, name = %record.name, "skipping unsupported file type");
        return Ok(FileOutcome::Skipped {
            reason: "unsupported file type".to_string(),
        });
    }
    if record.local_path().is_none() {
        info!(file_id = record.id, uri = %record.uri, "skipping non-file uri");
        return Ok(FileOutcome::Skipped {
            reason: format!("not a file:// uri: {}", record.uri),
        });
    }

    let expected = match expected_location(record, config) {
        Ok(location) => location,
        Err(e) => {
            warn!(file_id = record.id, file_type = %record.file_type, "{}", e);
            None
        }
    };

    let comparison = compare(record, expected.as_ref(), config.policy);
    if comparison.is_clean() {
        info!(sample_id, file_id = record.id, name = %record.name, "ok");
        return Ok(FileOutcome::Healthy);
    }

    for m in &comparison.mismatches {
        debug!(file_id = record.id, field = %m.field, actual = %m.actual, expected = %m.expected, "mismatch");
    }
    info!(sample_id, file_id = record.id, name = %record.name, uri = %record.uri, "broken");

    let Some(expected) = expected else {
        warn!(file_id = record.id, "can't repair: no expected location");
        return Ok(FileOutcome::Irreparable {
            reason: "no expected location".to_string(),
        });
    };
    if !is_accessible(&expected.path) {
        warn!(file_id = record.id, expected = %expected.uri(), "can't repair: expected file missing");
        return Ok(FileOutcome::Irreparable {
            reason: format!("expected file missing: {}", expected.path.display()),
        });
    }

    let update = build_update(record, &expected, config.policy);
    let from = record.uri.clone();

    if config.dry_run {
        info!(file_id = record.id, from = %from, to = %update.uri, "would repair");
        return Ok(FileOutcome::WouldRepair { from, update });
    }

    info!(file_id = record.id, from = %from, to = %update.uri, "repairing");
    let res = service.update_file(config.project_id, sample_id, record.id, &update)?;
    info!(file_id = record.id, status = res.status, body = %res.body, "update response");

    Ok(FileOutcome::Repaired { from, update })
}

/// Field-by-field comparison of a record with the disk. Under
/// [`ReconcilePolicy::Access`] only the uri is looked at.
pub fn compare(
    record: &FileRecord,
    expected: Option<&ExpectedLocation>,
    policy: ReconcilePolicy,
) -> Comparison {
    let mut comparison = Comparison::default();
    let current = record.local_path().unwrap_or_default();

    if !is_accessible(&current) {
        let expected_uri = expected.map(|e| e.uri()).unwrap_or_default();
        comparison.push(Field::Uri, &record.uri, expected_uri);
    }

    if policy == ReconcilePolicy::Access {
        return comparison;
    }

    if let Some(actual_size) = file_size(&current) {
        if record.size != Some(actual_size) {
            comparison.push(Field::Size, size_text(record.size), actual_size.to_string());
        }
    }

    if let Some(expected) = expected {
        if record.name != expected.filename {
            comparison.push(Field::Name, &record.name, &expected.filename);
        }
        if record.nickname.as_deref() != Some(expected.filename.as_str()) {
            comparison.push(
                Field::Nickname,
                record.nickname.clone().unwrap_or_default(),
                &expected.filename,
            );
        }
    }

    comparison
}

/// The update that makes `record` describe the file at `expected`.
pub fn build_update(
    record: &FileRecord,
    expected: &ExpectedLocation,
    policy: ReconcilePolicy,
) -> FileUpdate {
    let mut update = FileUpdate::new(expected.uri());
    if policy == ReconcilePolicy::Access {
        return update;
    }

    if let Some(size) = file_size(&expected.path) {
        if record.size != Some(size) {
            update.size = Some(size);
        }
    }
    if record.name != expected.filename {
        update.name = Some(expected.filename.clone());
    }
    if record.nickname.as_deref() != Some(expected.filename.as_str()) {
        update.nickname = Some(expected.filename.clone());
    }
    update
}

fn size_text(size: Option<u64>) -> String {
    size.map(|s| s.to_string()).unwrap_or_default()
}
