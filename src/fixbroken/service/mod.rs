//! # Sample Service
//!
//! The remote side of reconciliation. The [`SampleService`] trait covers the
//! three calls a run makes against the sample-tracking service:
//!
//! - list the samples of a project
//! - list the file records of a sample
//! - overwrite a file record's metadata
//!
//! ## Implementations
//!
//! - [`http::HttpService`]: production client for the Mosaic REST API
//!   - Blocking `reqwest` client, bearer-token auth on every call
//!   - Uniform `request(method, path, body) -> ApiResponse` underneath
//!
//! - [`memory::InMemoryService`]: test double
//!   - Holds samples and records in memory
//!   - Applies and records every update so tests can inspect the calls
//!
//! Business logic in `commands/` is generic over the trait and never knows
//! which one it is talking to.

use crate::error::Result;
use crate::model::{FileRecord, FileUpdate, Sample};

pub mod http;
pub mod memory;

/// Status and raw body of a service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait SampleService {
    /// All samples of a project
    fn list_samples(&self, project_id: u64) -> Result<Vec<Sample>>;

    /// File records attached to one sample
    fn list_files(&self, project_id: u64, sample_id: u64) -> Result<Vec<FileRecord>>;

    /// Overwrite a file record. Errors on transport failure or a non-success status.
    fn update_file(
        &mut self,
        project_id: u64,
        sample_id: u64,
        file_id: u64,
        update: &FileUpdate,
    ) -> Result<ApiResponse>;
}
