//! JSON export of the displayed heap and sorted list

use crate::errors::VisualizerError;
use crate::heap::Person;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot handed to the export collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub heap: Vec<Person>,
    pub sorted: Vec<Person>,
    /// RFC 3339 generation time (UTC)
    pub timestamp: String,
}

impl ExportSnapshot {
    pub fn new(heap: Vec<Person>, sorted: Vec<Person>) -> Self {
        ExportSnapshot {
            heap,
            sorted,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, VisualizerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `heap-data-<millis>.json` into `dir` and return its path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, VisualizerError> {
        let path = dir.join(format!("heap-data-{}.json", Utc::now().timestamp_millis()));
        fs::write(&path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "exported heap snapshot");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let snapshot = ExportSnapshot::new(vec![Person::new(3, 60)], vec![Person::new(1, 80)]);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"personId\": 3"));
        assert!(json.contains("\"weight\": 60"));
        assert!(json.contains("\"sorted\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = ExportSnapshot::new(vec![Person::new(1, 80), Person::new(2, 50)], vec![]);
        let parsed: ExportSnapshot = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_write_to_dir() {
        let dir = std::env::temp_dir();
        let snapshot = ExportSnapshot::new(vec![Person::new(1, 80)], vec![]);
        let path = snapshot.write_to_dir(&dir).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"personId\": 1"));
        let _ = fs::remove_file(path);
    }
}
