use super::error::LpError;
use std::path::PathBuf;
use std::process::Command;

/// Something that knows the name of the branch being worked on.
pub trait BranchSource {
    fn current_branch_name(&self) -> Result<String, LpError>;
}

/// Asks `git` for the abbreviated symbolic name of `HEAD`.
#[derive(Debug, Default, Clone)]
pub struct Git {
    /// Repository to query; the process working directory when `None`
    work_dir: Option<PathBuf>,
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(work_dir.into()),
        }
    }
}

impl BranchSource for Git {
    fn current_branch_name(&self) -> Result<String, LpError> {
        let mut command = Command::new("git");
        command.args(["rev-parse", "--symbolic", "--abbrev-ref", "HEAD"]);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|err| LpError::BranchNameUnavailable(err.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() { output.status.to_string() } else { stderr };
            return Err(LpError::BranchNameUnavailable(reason));
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            return Err(LpError::BranchNameUnavailable("git returned an empty branch name".to_string()));
        }
        Ok(name)
    }
}
