use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const FILE_URI_PREFIX: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Cram,
    Crai,
    Vcf,
    Tbi,
    #[serde(other)]
    Other,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileType::Cram => "cram",
            FileType::Crai => "crai",
            FileType::Vcf => "vcf",
            FileType::Tbi => "tbi",
            FileType::Other => "other",
        };
        f.write_str(s)
    }
}

/// A file record as the service reports it.
///
/// `size` travels as a string-encoded integer. Anything that does not parse
/// is kept as `None`, which never matches an on-disk size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default, deserialize_with = "size_from_wire")]
    pub size: Option<u64>,
}

impl FileRecord {
    pub fn new(id: u64, file_type: FileType, name: &str, uri: String, size: Option<u64>) -> Self {
        Self {
            id,
            file_type,
            name: name.to_string(),
            nickname: Some(name.to_string()),
            uri,
            size,
        }
    }

    /// The local path behind a `file://` URI. `None` for any other scheme.
    pub fn local_path(&self) -> Option<PathBuf> {
        if self.uri.is_empty() {
            return Some(PathBuf::new());
        }
        self.uri.strip_prefix(FILE_URI_PREFIX).map(PathBuf::from)
    }
}

fn size_from_wire<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

/// Body of the corrective PUT. Optional fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUpdate {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl FileUpdate {
    pub fn new(uri: String) -> Self {
        Self {
            uri,
            size: None,
            name: None,
            nickname: None,
        }
    }
}

/// Where a record's file should live according to the project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedLocation {
    pub path: PathBuf,
    pub filename: String,
}

impl ExpectedLocation {
    pub fn new(dir: &std::path::Path, filename: &str) -> Self {
        Self {
            path: dir.join(filename),
            filename: filename.to_string(),
        }
    }

    pub fn uri(&self) -> String {
        format!("{}{}", FILE_URI_PREFIX, self.path.display())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Uri,
    Size,
    Name,
    Nickname,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Uri => "uri",
            Field::Size => "size",
            Field::Name => "name",
            Field::Nickname => "nickname",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: Field,
    pub actual: String,
    pub expected: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn push(&mut self, field: Field, actual: impl Into<String>, expected: impl Into<String>) {
        self.mismatches.push(Mismatch {
            field,
            actual: actual.into(),
            expected: expected.into(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}
