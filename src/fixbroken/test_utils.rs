use crate::config::ReconcileConfig;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A throwaway project directory laid out like the shared filesystem.
pub struct ProjectFixture {
    // Keeps the directory alive for the duration of the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl ProjectFixture {
    /// Project with both `Data/PolishedBams` and `VCF/Complete` present.
    pub fn new() -> Self {
        let project = Self::bare();
        fs::create_dir_all(project.data_dir()).expect("failed to create bam dir");
        fs::create_dir_all(project.vcf_dir()).expect("failed to create vcf dir");
        project
    }

    /// Project root with no subdirectories.
    pub fn bare() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn config(&self) -> ReconcileConfig {
        ReconcileConfig::new("test-token", 42, self.root.clone())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.config().data_dir()
    }

    pub fn vcf_dir(&self) -> PathBuf {
        self.config().vcf_dir()
    }

    pub fn with_bam(self, name: &str, content: &[u8]) -> Self {
        fs::write(self.data_dir().join(name), content).expect("failed to write bam");
        self
    }

    pub fn with_vcf(self, name: &str, content: &[u8]) -> Self {
        fs::write(self.vcf_dir().join(name), content).expect("failed to write vcf");
        self
    }

    /// A `file://` URI for a path under the project root.
    pub fn uri(&self, rel: &str) -> String {
        format!("file://{}", self.root.join(rel).display())
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with an INFO-level subscriber and return what it logged.
pub fn capture_info_logs(f: impl FnOnce()) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
