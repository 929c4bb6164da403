//! Build domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single documentation build as reported by ReadTheDocs
///
/// Every field is optional: the waiter only cares whether a record is
/// present, so a partially populated record must still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub id: Option<u64>,
    /// Slug of the version being built (e.g. "latest", "stable", "3.5.2")
    pub version: Option<String>,
    pub commit: Option<String>,
    pub state: Option<BuildState>,
    pub created: Option<DateTime<Utc>>,
    /// `None` until the build has finished
    pub success: Option<bool>,
}

/// Build state as `{ "code": "building", "name": "Building" }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildState {
    pub code: String,
    pub name: String,
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{}", id)?,
            None => write!(f, "#?")?,
        }

        let version = self.version.as_deref().unwrap_or("unknown version");
        match &self.state {
            Some(state) if !state.code.is_empty() => write!(f, " ({}, {})", version, state.code)?,
            _ => write!(f, " ({})", version)?,
        }

        if let Some(created) = self.created {
            write!(f, " queued at {}", created.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }

        Ok(())
    }
}
