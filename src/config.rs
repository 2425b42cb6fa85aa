//! Collection configuration loading.
//!
//! Each collection directory carries an `input.json` describing the persona,
//! the task, and the documents to process. Missing or malformed
//! configuration is a hard failure for that collection only.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The persona on whose behalf pages are ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Role description, e.g. "Travel Planner"
    pub role: String,
}

/// The task the persona needs to accomplish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobToBeDone {
    /// Task description, e.g. "Plan a 4-day trip for 10 college friends"
    pub task: String,
}

/// One document listed in a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Filename relative to the collection's PDF directory
    pub filename: String,

    /// Optional display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Configuration for one collection of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Documents to process, in order
    pub documents: Vec<DocumentRef>,

    /// Persona role
    pub persona: Persona,

    /// Task description
    pub job_to_be_done: JobToBeDone,
}

impl CollectionConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("invalid JSON in {}: {}", path.display(), e)))
    }

    /// Filenames of all configured documents, in order.
    pub fn filenames(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }
}
