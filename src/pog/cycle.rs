//! Test cycles and their durable export format
//!
//! A [`CycleLog`] is the only mutable state in the scoring half: an
//! append-only, caller-owned sequence. Cycles themselves are never mutated
//! after they are appended.
//!
//! Export envelope (JSON):
//!
//! ```text
//! { "timestamp": "...", "session_id": "...", "total_cycles": 2, "cycles": [ ... ] }
//! ```
//!
//! Import accepts the envelope or a bare array of cycles. Every cycle field is
//! required; a batch with any malformed record is rejected whole.

use super::outcome::{OutputType, Temptation};
use crate::error::{Error, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Free-form per-cycle metadata
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One recorded evaluation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCycle {
    pub timestamp: String,
    pub prompt: String,
    pub response: String,
    pub output_type: OutputType,
    pub temptations_detected: Vec<Temptation>,
    pub temptations_resisted: Vec<Temptation>,
    /// Derived from `output_type` when the cycle is created
    pub contains_uncertainty: bool,
    pub metadata: Metadata,
}

impl TestCycle {
    /// New cycle stamped with the current time
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        output_type: impl Into<OutputType>,
    ) -> Self {
        let output_type = output_type.into();
        Self {
            timestamp: Utc::now().to_rfc3339(),
            prompt: prompt.into(),
            response: response.into(),
            contains_uncertainty: output_type.preserves_uncertainty(),
            output_type,
            temptations_detected: Vec::new(),
            temptations_resisted: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_detected<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Temptation>,
    {
        self.temptations_detected = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resisted<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Temptation>,
    {
        self.temptations_resisted = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Scoring always classifies by category, not by the stored flag
    pub fn preserves_uncertainty(&self) -> bool {
        self.output_type.preserves_uncertainty()
    }
}

/// Durable export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleExport {
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub total_cycles: usize,
    pub cycles: Vec<TestCycle>,
}

/// Append-only log of cycles for one analysis session
#[derive(Debug, Clone)]
pub struct CycleLog {
    session_id: Uuid,
    cycles: Vec<TestCycle>,
}

impl Default for CycleLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleLog {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            cycles: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append a cycle and hand back a reference to it
    pub fn add_cycle(&mut self, cycle: TestCycle) -> &TestCycle {
        tracing::debug!(
            session = %self.session_id,
            output_type = %cycle.output_type,
            "cycle recorded"
        );
        self.cycles.push(cycle);
        &self.cycles[self.cycles.len() - 1]
    }

    pub fn cycles(&self) -> &[TestCycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn into_cycles(self) -> Vec<TestCycle> {
        self.cycles
    }

    /// Write the whole log to `path`
    pub fn export(&self, path: &Path) -> Result<()> {
        save_cycles(path, &self.cycles, Some(self.session_id))
    }

    /// Load files or directories and append their cycles.
    ///
    /// All-or-nothing: on error the log is left unchanged.
    pub fn import(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let loaded = load_paths(paths)?;
        let count = loaded.len();
        self.cycles.extend(loaded);
        Ok(count)
    }
}

/// Serialize cycles to `path` inside an export envelope
pub fn save_cycles(path: &Path, cycles: &[TestCycle], session_id: Option<Uuid>) -> Result<()> {
    let export = CycleExport {
        timestamp: Utc::now().to_rfc3339(),
        session_id,
        total_cycles: cycles.len(),
        cycles: cycles.to_vec(),
    };
    let json = serde_json::to_string_pretty(&export)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| Error::io(path, e))?;

    tracing::info!(path = %path.display(), cycles = cycles.len(), "saved cycles");
    Ok(())
}

/// Parse an export (envelope or bare array) from a string
pub fn parse_cycles(path: &Path, content: &str) -> Result<Vec<TestCycle>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| Error::malformed(path, e.to_string()))?;

    let cycles = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<TestCycle>>(value)
            .map_err(|e| Error::malformed(path, e.to_string()))?,
        serde_json::Value::Object(_) => {
            let export: CycleExport = serde_json::from_value(value)
                .map_err(|e| Error::malformed(path, e.to_string()))?;
            if export.total_cycles != export.cycles.len() {
                return Err(Error::malformed(
                    path,
                    format!(
                        "total_cycles is {} but {} cycles are present",
                        export.total_cycles,
                        export.cycles.len()
                    ),
                ));
            }
            export.cycles
        }
        _ => {
            return Err(Error::malformed(
                path,
                "expected an export object or an array of cycles",
            ))
        }
    };

    for (i, cycle) in cycles.iter().enumerate() {
        if cycle.contains_uncertainty != cycle.preserves_uncertainty() {
            tracing::warn!(
                path = %path.display(),
                index = i,
                output_type = %cycle.output_type,
                "stored contains_uncertainty disagrees with output type; scoring uses the output type"
            );
        }
    }

    Ok(cycles)
}

/// Load a single export file
pub fn load_cycles(path: &Path) -> Result<Vec<TestCycle>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cycles = parse_cycles(path, &content)?;
    tracing::info!(path = %path.display(), cycles = cycles.len(), "loaded cycles");
    Ok(cycles)
}

/// Load files and directories (every `*.json` directly inside, sorted by name)
/// as one condition. Fails without returning anything if any file is bad.
pub fn load_paths(paths: &[PathBuf]) -> Result<Vec<TestCycle>> {
    let mut cycles = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in json_files(path)? {
                cycles.extend(load_cycles(&file)?);
            }
        } else {
            cycles.extend(load_cycles(path)?);
        }
    }
    Ok(cycles)
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            Error::io(path, source)
        })?;
        let is_json = entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("json");
        if is_json {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
