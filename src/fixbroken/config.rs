use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://mosaic.chpc.utah.edu/api/v1";

const POLISHED_BAM_DIR: &str = "Data/PolishedBams";
const COMPLETE_VCF_DIR: &str = "VCF/Complete";

/// How a record is judged broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReconcilePolicy {
    /// Only check that the file behind `uri` exists
    Access,
    /// Also compare size, name and nickname against the file on disk
    #[default]
    Metadata,
}

/// Everything a run needs, built once from the command line.
#[derive(Clone)]
pub struct ReconcileConfig {
    pub api_url: String,
    pub token: String,
    pub project_id: u64,
    pub project_dir: PathBuf,
    pub policy: ReconcilePolicy,
    pub dry_run: bool,
    pub sample: Option<u64>,
    pub limit: Option<usize>,
    pub timeout: Option<Duration>,
}

impl ReconcileConfig {
    pub fn new(token: impl Into<String>, project_id: u64, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            project_id,
            project_dir: project_dir.into(),
            policy: ReconcilePolicy::default(),
            dry_run: false,
            sample: None,
            limit: None,
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_policy(mut self, policy: ReconcilePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_sample(mut self, sample: Option<u64>) -> Self {
        self.sample = sample;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Canonical home of CRAM/CRAI files.
    pub fn data_dir(&self) -> PathBuf {
        self.project_dir.join(POLISHED_BAM_DIR)
    }

    /// Directory holding the finished `.vcf.gz` and its index.
    pub fn vcf_dir(&self) -> PathBuf {
        self.project_dir.join(COMPLETE_VCF_DIR)
    }
}

impl fmt::Debug for ReconcileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconcileConfig")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("project_dir", &self.project_dir)
            .field("policy", &self.policy)
            .field("dry_run", &self.dry_run)
            .field("sample", &self.sample)
            .field("limit", &self.limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}
