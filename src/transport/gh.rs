use crate::search::SearchError;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

const INSTALL_HINT: &str =
    "install the GitHub CLI from https://cli.github.com or set gh_path in settings.json";

#[cfg(windows)]
const EXECUTABLE_NAMES: &[&str] = &["gh.exe", "gh"];
#[cfg(not(windows))]
const EXECUTABLE_NAMES: &[&str] = &["gh"];

/// Handle on the authenticated gh executable
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
}

impl GhCli {
    /// Locate gh using the configured path, or the process PATH
    pub fn locate(configured: Option<&Path>) -> Result<Self, SearchError> {
        Self::locate_in(configured, env::var_os("PATH"))
    }

    pub fn locate_in(
        configured: Option<&Path>,
        path_var: Option<OsString>,
    ) -> Result<Self, SearchError> {
        if let Some(path) = configured {
            if is_executable(path) {
                return Ok(Self::new(path));
            }
            return Err(SearchError::unavailable(format!(
                "configured gh_path {} is not an executable file; {}",
                path.display(),
                INSTALL_HINT
            )));
        }

        let dirs: Vec<PathBuf> = path_var
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();

        for dir in dirs {
            // Relative entries resolve against the working directory
            if !dir.is_absolute() {
                continue;
            }
            for name in EXECUTABLE_NAMES {
                let candidate = dir.join(name);
                if is_executable(&candidate) {
                    tracing::debug!(program = %candidate.display(), "located gh");
                    return Ok(Self::new(candidate));
                }
            }
        }

        Err(SearchError::unavailable(format!(
            "no gh executable in PATH; {}",
            INSTALL_HINT
        )))
    }

    /// Use the given program as-is, without checking it exists
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run gh and capture stdout
    pub fn run(&self, args: &[String]) -> Result<Vec<u8>, SearchError> {
        tracing::debug!(program = %self.program.display(), ?args, "running gh");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                SearchError::unavailable(format!(
                    "failed to start {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SearchError::request(format!(
                "{}, stderr: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    /// Run gh with stdout attached to ours; stderr is captured for diagnostics
    pub fn run_streaming(&self, args: &[String]) -> io::Result<(ExitStatus, String)> {
        tracing::debug!(program = %self.program.display(), ?args, "running gh (streaming)");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Ok((output.status, stderr))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
