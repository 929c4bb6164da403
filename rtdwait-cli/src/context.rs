//! Execution context
//!
//! Capabilities handed to the waiter by whatever invokes it: a place to
//! write progress and a channel to signal failure on. Both are passed in
//! explicitly so tests can record what the poller says.

use colored::*;
use tracing::{debug, info, warn};

/// Progress output
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Logger backed by the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn debug(&self, message: &str) {
        debug!("{}", message);
    }
}

/// Failure channel of the surrounding automation
pub trait FailureReporter: Send + Sync {
    /// Reports a terminal failure; called at most once per run
    fn fail(&self, message: &str);
}

/// Writes failures to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl FailureReporter for ConsoleReporter {
    fn fail(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

/// Emits a GitHub Actions `::error::` workflow command
///
/// The runner turns this into an annotation on the failed step.
#[derive(Debug, Default, Clone, Copy)]
pub struct GithubActionsReporter;

impl FailureReporter for GithubActionsReporter {
    fn fail(&self, message: &str) {
        println!("{}", error_command(message));
    }
}

/// Picks the reporter matching the environment we run in
pub fn reporter_from_env() -> Box<dyn FailureReporter> {
    let on_actions = std::env::var("GITHUB_ACTIONS")
        .map(|v| v == "true")
        .unwrap_or(false);

    if on_actions {
        Box::new(GithubActionsReporter)
    } else {
        Box::new(ConsoleReporter)
    }
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escapes a workflow command payload (`%`, CR and LF)
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
