use super::{ApiResponse, SampleService};
use crate::error::{FixError, Result};
use crate::model::{FileRecord, FileUpdate, Sample};
use std::collections::{BTreeMap, HashSet};

/// One update call as the service received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    pub project_id: u64,
    pub sample_id: u64,
    pub file_id: u64,
    pub update: FileUpdate,
}

/// In-memory stand-in for the remote service.
///
/// Updates are applied to the stored records, so a second run sees the
/// repaired state.
#[derive(Debug, Default)]
pub struct InMemoryService {
    samples: BTreeMap<u64, Vec<FileRecord>>,
    broken_listings: HashSet<u64>,
    rejected_files: HashSet<u64>,
    updates: Vec<RecordedUpdate>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample(mut self, sample_id: u64, files: Vec<FileRecord>) -> Self {
        self.samples.insert(sample_id, files);
        self
    }

    /// Listing this sample's files will fail.
    pub fn with_broken_listing(mut self, sample_id: u64) -> Self {
        self.samples.entry(sample_id).or_default();
        self.broken_listings.insert(sample_id);
        self
    }

    /// Updates to this file id will be rejected.
    pub fn with_rejected_file(mut self, file_id: u64) -> Self {
        self.rejected_files.insert(file_id);
        self
    }

    pub fn updates(&self) -> &[RecordedUpdate] {
        &self.updates
    }

    pub fn file(&self, sample_id: u64, file_id: u64) -> Option<&FileRecord> {
        self.samples
            .get(&sample_id)
            .and_then(|files| files.iter().find(|f| f.id == file_id))
    }
}

impl SampleService for InMemoryService {
    fn list_samples(&self, _project_id: u64) -> Result<Vec<Sample>> {
        Ok(self.samples.keys().map(|&id| Sample { id }).collect())
    }

    fn list_files(&self, _project_id: u64, sample_id: u64) -> Result<Vec<FileRecord>> {
        if self.broken_listings.contains(&sample_id) {
            return Err(FixError::Api(format!(
                "listing files of sample {} failed",
                sample_id
            )));
        }
        self.samples
            .get(&sample_id)
            .cloned()
            .ok_or_else(|| FixError::Api(format!("sample {} not found", sample_id)))
    }

    fn update_file(
        &mut self,
        project_id: u64,
        sample_id: u64,
        file_id: u64,
        update: &FileUpdate,
    ) -> Result<ApiResponse> {
        self.updates.push(RecordedUpdate {
            project_id,
            sample_id,
            file_id,
            update: update.clone(),
        });

        if self.rejected_files.contains(&file_id) {
            return Err(FixError::Api(format!("update of file {} rejected", file_id)));
        }

        let record = self
            .samples
            .get_mut(&sample_id)
            .and_then(|files| files.iter_mut().find(|f| f.id == file_id))
            .ok_or_else(|| FixError::Api(format!("file {} not found", file_id)))?;

        record.uri = update.uri.clone();
        if let Some(size) = update.size {
            record.size = Some(size);
        }
        if let Some(name) = &update.name {
            record.name = name.clone();
        }
        if let Some(nickname) = &update.nickname {
            record.nickname = Some(nickname.clone());
        }

        Ok(ApiResponse {
            status: 200,
            body: "{}".to_string(),
        })
    }
}
