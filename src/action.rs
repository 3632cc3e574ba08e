use crate::search::{Repository, SearchError};
use crate::transport::GhCli;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Unavailable(#[from] SearchError),

    #[error("gh repo view failed: {detail}")]
    ViewFailed { detail: String },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// What happens to the repository the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Print where to find more details
    #[default]
    Summary,
    /// Hand off to `gh repo view`
    View,
}

pub enum ActionDispatcher {
    Summary { color: bool },
    View { gh: GhCli },
}

impl ActionDispatcher {
    pub fn dispatch<W: Write>(&self, repo: &Repository, out: &mut W) -> Result<(), ActionError> {
        match self {
            ActionDispatcher::Summary { color } => {
                writeln!(out, "\n{}", summary_line(repo, *color))?;
                Ok(())
            }
            ActionDispatcher::View { gh } => {
                tracing::info!(repository = %repo.identifier, "delegating to gh repo view");
                out.flush()?;

                let args = view_args(repo);
                let (status, stderr) = gh.run_streaming(&args).map_err(|e| {
                    SearchError::unavailable(format!(
                        "failed to start {}: {}",
                        gh.program().display(),
                        e
                    ))
                })?;

                if !status.success() {
                    return Err(ActionError::ViewFailed {
                        detail: format!("{}, stderr: {}", status, stderr),
                    });
                }
                Ok(())
            }
        }
    }
}

pub fn view_args(repo: &Repository) -> Vec<String> {
    vec!["repo".to_string(), "view".to_string(), repo.identifier.clone()]
}

pub fn summary_line(repo: &Repository, color: bool) -> String {
    let url = repo.web_url();
    let url = if color { url.green().to_string() } else { url };
    format!(
        r#"For more info, run "gh repo view {}" or view on the web at {}"#,
        repo.identifier, url
    )
}
