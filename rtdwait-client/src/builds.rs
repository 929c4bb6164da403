//! Build-related API endpoints

use reqwest::{Request, Url};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::ReadTheDocsClient;
use crate::error::{ClientError, Result};
use rtdwait_core::dto::build::{BuildList, BuildQuery};

impl ReadTheDocsClient {
    // =============================================================================
    // Builds
    // =============================================================================

    /// List builds of a project
    ///
    /// # Arguments
    /// * `project` - Project slug (e.g., "red-discordbot")
    /// * `query` - Filters applied by the API
    ///
    /// # Returns
    /// The first page of matching builds
    pub async fn list_builds(&self, project: &str, query: &BuildQuery) -> Result<BuildList> {
        let request = self.builds_request(project, query)?;
        debug!("GET {}", request.url());

        let response = self.client.execute(request).await?;

        self.handle_response(response).await
    }

    /// List builds of `commit` that have not finished yet
    ///
    /// # Example
    /// ```no_run
    /// # use rtdwait_client::ReadTheDocsClient;
    /// # async fn example() -> rtdwait_client::Result<()> {
    /// let client = ReadTheDocsClient::new("secret");
    /// let builds = client.list_running_builds("red-discordbot", "6b4ab3a1a1e4").await?;
    /// if builds.is_finished() {
    ///     println!("docs are up to date");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_running_builds(&self, project: &str, commit: &str) -> Result<BuildList> {
        if commit.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "commit cannot be empty".to_string(),
            ));
        }

        self.list_builds(project, &BuildQuery::running_for_commit(commit))
            .await
    }

    /// Build (without sending) the list request for a project
    pub(crate) fn builds_request(&self, project: &str, query: &BuildQuery) -> Result<Request> {
        let project = project.trim();
        if project.is_empty() {
            return Err(ClientError::InvalidRequest(
                "project slug cannot be empty".to_string(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "API token cannot be empty".to_string(),
            ));
        }

        let base = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        if base.cannot_be_a_base() || base.host_str().is_none() {
            return Err(ClientError::InvalidRequest(format!(
                "invalid base URL {:?}: no host",
                self.base_url
            )));
        }

        let url = format!("{}/api/v3/projects/{}/builds/", self.base_url, project);
        self.client
            .get(&url)
            .query(query)
            .header(AUTHORIZATION, self.authorization())
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to build request: {}", e)))
    }
}
