//! Build DTOs
//!
//! Query filters sent to `GET /api/v3/projects/<project>/builds/` and the
//! paginated list it returns.

use serde::{Deserialize, Serialize};

use crate::domain::build::Build;

/// Query string filters for the builds list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

impl BuildQuery {
    /// Filter for builds of `commit` that are still in progress
    pub fn running_for_commit(commit: impl Into<String>) -> Self {
        Self {
            running: Some(true),
            commit: Some(commit.into()),
        }
    }
}

/// Paginated list of builds
///
/// A body without `results` (or with `"results": null`) deserializes with
/// `results == None`, which counts as "nothing pending".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildList {
    /// Total number of matches across all pages
    pub count: Option<u64>,
    /// URL of the next page, if any
    pub next: Option<String>,
    pub results: Option<Vec<Build>>,
}

impl BuildList {
    /// Builds still in progress
    pub fn pending(&self) -> &[Build] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Number of pending builds, counting those on later pages
    pub fn total_pending(&self) -> u64 {
        self.count
            .unwrap_or(0)
            .max(self.pending().len() as u64)
    }

    /// True when no pending build record is present
    pub fn is_finished(&self) -> bool {
        self.pending().is_empty()
    }
}
