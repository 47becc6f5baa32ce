use crate::commands::check::check_files;
use crate::commands::ReconcileReport;
use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::service::SampleService;
use tracing::{error, info, warn};

/// Reconcile every sample of the configured project, one after another.
///
/// Only the initial sample listing is fatal. A sample whose files cannot be
/// listed is counted and skipped.
pub fn run<S: SampleService>(service: &mut S, config: &ReconcileConfig) -> Result<ReconcileReport> {
    let mut samples = service.list_samples(config.project_id)?;

    if let Some(only) = config.sample {
        samples.retain(|s| s.id == only);
        if samples.is_empty() {
            warn!(project_id = config.project_id, sample_id = only, "sample not found in project");
        }
    }
    if let Some(limit) = config.limit {
        samples.truncate(limit);
    }

    info!(project_id = config.project_id, samples = samples.len(), "reconciling");

    let mut report = ReconcileReport::default();
    for sample in &samples {
        report.merge(check_sample(service, config, sample.id));
    }
    Ok(report)
}

/// Reconcile the records of a single sample.
pub fn check_sample<S: SampleService>(
    service: &mut S,
    config: &ReconcileConfig,
    sample_id: u64,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let files = match service.list_files(config.project_id, sample_id) {
        Ok(files) => files,
        Err(e) => {
            error!(sample_id, "cannot list files: {}", e);
            report.samples_failed = 1;
            return report;
        }
    };

    info!(sample_id, files = files.len(), "checking sample");
    report.samples_checked = 1;
    report.files = check_files(service, config, sample_id, &files);
    report
}
