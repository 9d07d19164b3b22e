use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Answer;

/// Bumped whenever a catalog change could alter how stored answers score.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

const SLOT_PREFIX: &str = "evaluationData_";

/// Durable slot address for one respondent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn for_respondent(identity: &str) -> Self {
        Self(format!("{SLOT_PREFIX}{identity}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document written to a slot: the full answer map and when it was saved.
///
/// Reading is per entry: a stored value that is not an answer lands in
/// `unreadable` and the remaining entries load normally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredDocument")]
pub struct PersistedAnswers {
    pub answers: BTreeMap<String, Answer>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub schema_version: u32,
    #[serde(skip)]
    pub unreadable: BTreeMap<String, serde_json::Value>,
}

impl PersistedAnswers {
    pub fn new(answers: BTreeMap<String, Answer>, timestamp: i64) -> Self {
        Self {
            answers,
            timestamp,
            schema_version: CATALOG_SCHEMA_VERSION,
            unreadable: BTreeMap::new(),
        }
    }

    pub fn is_current(&self) -> bool {
        self.schema_version == CATALOG_SCHEMA_VERSION
    }
}

#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    answers: BTreeMap<String, serde_json::Value>,
    timestamp: i64,
    /// Absent in documents written before versioning; read as 0.
    #[serde(default)]
    schema_version: u32,
}

impl From<StoredDocument> for PersistedAnswers {
    fn from(stored: StoredDocument) -> Self {
        let mut answers = BTreeMap::new();
        let mut unreadable = BTreeMap::new();
        for (question_id, value) in stored.answers {
            match Answer::deserialize(&value) {
                Ok(answer) => {
                    answers.insert(question_id, answer);
                }
                Err(_) => {
                    unreadable.insert(question_id, value);
                }
            }
        }

        Self {
            answers,
            timestamp: stored.timestamp,
            schema_version: stored.schema_version,
            unreadable,
        }
    }
}

/// Storage abstraction for persisted answer slots.
pub trait AnswerSlotStore: Send + Sync {
    fn load(&self, key: &SlotKey) -> Result<Option<PersistedAnswers>, StoreError>;
    fn save(&self, key: &SlotKey, document: &PersistedAnswers) -> Result<(), StoreError>;
    fn remove(&self, key: &SlotKey) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("slot '{key}' could not be accessed: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("slot '{key}' holds malformed data: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("slot '{key}' could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One JSON file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &SlotKey) -> PathBuf {
        self.root.join(format!("{}.json", encode_file_name(key.as_str())))
    }

    fn io_error(key: &SlotKey, source: io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl AnswerSlotStore for FileSlotStore {
    fn load(&self, key: &SlotKey) -> Result<Option<PersistedAnswers>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Self::io_error(key, err)),
        };

        let document = serde_json::from_slice(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        debug!(slot = %key, path = %path.display(), "slot loaded");
        Ok(Some(document))
    }

    fn save(&self, key: &SlotKey, document: &PersistedAnswers) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|err| Self::io_error(key, err))?;

        let payload = serde_json::to_vec_pretty(document).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        let written = fs::File::create(&staging)
            .and_then(|mut file| {
                file.write_all(&payload)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&staging, &path));
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&staging) {
                debug!(slot = %key, error = %cleanup, "staging file not removed");
            }
            return Err(Self::io_error(key, err));
        }

        debug!(slot = %key, answers = document.answers.len(), "slot saved");
        Ok(())
    }

    fn remove(&self, key: &SlotKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }
}

/// Keeps ASCII alphanumerics plus `-`, `_`, `.` and `@`; everything else is
/// percent-encoded byte by byte.
fn encode_file_name(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'@' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    if encoded.starts_with('.') {
        encoded.replace_range(0..1, "%2E");
    }
    encoded
}

/// Process-local store used by tests and the stateless HTTP surface.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<SlotKey, PersistedAnswers>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnswerSlotStore for MemorySlotStore {
    fn load(&self, key: &SlotKey) -> Result<Option<PersistedAnswers>, StoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StoreError::Unavailable("slot map poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &SlotKey, document: &PersistedAnswers) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StoreError::Unavailable("slot map poisoned".to_string()))?;
        slots.insert(key.clone(), document.clone());
        Ok(())
    }

    fn remove(&self, key: &SlotKey) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StoreError::Unavailable("slot map poisoned".to_string()))?;
        slots.remove(key);
        Ok(())
    }
}
