//! Build poller
//!
//! Waits for every in-progress ReadTheDocs build of one commit to finish.
//! The poller sleeps before each request, so even the first request waits
//! one interval. This gives ReadTheDocs time to pick up a freshly pushed
//! revision.

use std::sync::Arc;

use rtdwait_client::ClientError;
use tokio::time::{self, Duration, Instant};

use crate::config::Config;
use crate::context::Logger;
use crate::error::WaitError;
use crate::repository::BuildSource;

/// Outcome of a successful wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSummary {
    /// Number of API requests issued
    pub requests: u32,
    /// Time spent waiting, including the initial sleep
    pub elapsed: Duration,
}

/// Polls the build source until nothing is pending or the deadline passes
pub struct BuildPoller {
    config: Config,
    source: Arc<dyn BuildSource>,
    logger: Arc<dyn Logger>,
}

impl BuildPoller {
    /// Creates a new build poller
    pub fn new(config: Config, source: Arc<dyn BuildSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            source,
            logger,
        }
    }

    /// Runs the polling loop to completion
    ///
    /// Returns after the first response without pending builds. A non-2xx
    /// response or an unreadable body ends the wait immediately. Transport
    /// failures and requests cut off by the per-request timeout are retried
    /// on the normal cadence until the deadline.
    pub async fn run(&self) -> Result<PollSummary, WaitError> {
        let commit = &self.config.commit;
        let started = Instant::now();
        let deadline = started + self.config.timeout;
        let mut requests = 0;

        self.logger.info(&format!(
            "Waiting for ReadTheDocs builds of {} at commit {} (poll interval {:?}, timeout {:?})",
            self.config.project, commit, self.config.poll_interval, self.config.timeout
        ));

        loop {
            time::sleep(self.config.poll_interval).await;

            let now = Instant::now();
            if now > deadline {
                break;
            }

            requests += 1;
            self.logger
                .info(&format!("Retrieving pending ReadTheDocs builds for commit {}...", commit));

            let request_budget = self.config.request_timeout.min(deadline - now);
            let response = time::timeout(
                request_budget,
                self.source.running_builds(&self.config.project, commit),
            )
            .await;

            let builds = match response {
                Ok(Ok(builds)) => builds,
                Ok(Err(e)) if e.is_transport() => {
                    self.logger
                        .warn(&format!("Request to ReadTheDocs failed, will retry: {}", e));
                    continue;
                }
                Ok(Err(e)) => return Err(self.fatal(e)),
                Err(_) => {
                    self.logger.warn(&format!(
                        "Request to ReadTheDocs timed out after {:?}, will retry",
                        request_budget
                    ));
                    continue;
                }
            };

            if builds.is_finished() {
                let elapsed = started.elapsed();
                self.logger.info(&format!(
                    "All ReadTheDocs builds for commit {} have finished ({} request(s), {:?}).",
                    commit, requests, elapsed
                ));
                return Ok(PollSummary { requests, elapsed });
            }

            for build in builds.pending() {
                self.logger.debug(&format!("Pending build {}", build));
            }
            if builds.next.is_some() {
                self.logger
                    .debug("More pending builds exist beyond the first page");
            }
            self.logger.info(&format!(
                "{} pending ReadTheDocs build(s) for commit {}, waiting for {:?}...",
                builds.total_pending(),
                commit,
                self.config.poll_interval
            ));
        }

        Err(WaitError::Timeout {
            budget: self.config.timeout,
        })
    }

    fn fatal(&self, err: ClientError) -> WaitError {
        self.logger.debug(&format!("Giving up after error: {:?}", err));
        WaitError::from(err)
    }
}
