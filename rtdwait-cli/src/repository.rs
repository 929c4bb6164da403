//! Build status repository
//!
//! Abstracts the single API call the poller makes so the polling loop can
//! be driven by a scripted source in tests.

use async_trait::async_trait;
use rtdwait_client::{BuildList, ReadTheDocsClient, Result};

/// Source of pending-build information for a commit
#[async_trait]
pub trait BuildSource: Send + Sync {
    /// Fetches the builds of `commit` that are still running
    ///
    /// # Arguments
    /// * `project` - ReadTheDocs project slug
    /// * `commit` - Revision being awaited
    async fn running_builds(&self, project: &str, commit: &str) -> Result<BuildList>;
}

/// HTTP implementation of BuildSource
pub struct HttpBuildSource {
    client: ReadTheDocsClient,
}

impl HttpBuildSource {
    pub fn new(client: ReadTheDocsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BuildSource for HttpBuildSource {
    async fn running_builds(&self, project: &str, commit: &str) -> Result<BuildList> {
        self.client.list_running_builds(project, commit).await
    }
}
