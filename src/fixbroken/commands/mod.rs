use crate::model::FileUpdate;

pub mod check;
pub mod reconcile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What happened to one file record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Healthy,
    Repaired { from: String, update: FileUpdate },
    /// Broken and repairable, but the run was a dry run
    WouldRepair { from: String, update: FileUpdate },
    Irreparable { reason: String },
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub sample_id: u64,
    pub file_id: u64,
    pub name: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub samples_checked: usize,
    pub samples_failed: usize,
    pub files: Vec<FileReport>,
}

impl ReconcileReport {
    pub fn merge(&mut self, other: ReconcileReport) {
        self.samples_checked += other.samples_checked;
        self.samples_failed += other.samples_failed;
        self.files.extend(other.files);
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    pub fn healthy(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Healthy))
    }

    pub fn repaired(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Repaired { .. }))
    }

    pub fn would_repair(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::WouldRepair { .. }))
    }

    pub fn irreparable(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Irreparable { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    /// Summary lines for the end of a run.
    pub fn messages(&self) -> Vec<CmdMessage> {
        let mut messages = vec![CmdMessage::info(format!(
            "Checked {} file(s) across {} sample(s).",
            self.files.len(),
            self.samples_checked
        ))];

        if self.files.len() == self.healthy() && self.samples_failed == 0 {
            messages.push(CmdMessage::success("All file records are consistent."));
            return messages;
        }

        if self.healthy() > 0 {
            messages.push(CmdMessage::info(format!("  - {} healthy", self.healthy())));
        }
        if self.repaired() > 0 {
            messages.push(CmdMessage::success(format!("  - {} repaired", self.repaired())));
        }
        if self.would_repair() > 0 {
            messages.push(CmdMessage::info(format!(
                "  - {} would be repaired (dry run)",
                self.would_repair()
            )));
        }
        if self.irreparable() > 0 {
            messages.push(CmdMessage::warning(format!(
                "  - {} cannot be repaired",
                self.irreparable()
            )));
        }
        if self.skipped() > 0 {
            messages.push(CmdMessage::info(format!("  - {} skipped", self.skipped())));
        }
        if self.failed() > 0 {
            messages.push(CmdMessage::error(format!("  - {} failed", self.failed())));
        }
        if self.samples_failed > 0 {
            messages.push(CmdMessage::error(format!(
                "  - {} sample(s) could not be listed",
                self.samples_failed
            )));
        }

        messages
    }
}
