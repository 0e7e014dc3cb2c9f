use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::{info, warn};

/// Runs the external packaging toolchain inside the workspace. Exit
/// codes are not propagated; a failed build surfaces as a missing
/// artifact at the publish step.
pub struct BuildRunner {
    workspace_dir: PathBuf,
}

impl BuildRunner {
    pub fn new(workspace_dir: PathBuf) -> Self {
        Self { workspace_dir }
    }

    pub fn install_dependencies(&self) -> Result<(), String> {
        self.run_shell("npm install")
    }

    pub fn build_distribution(&self) -> Result<(), String> {
        self.run_shell("npm run dist")
    }

    fn run_shell(&self, command_line: &str) -> Result<(), String> {
        info!(
            "build: running `{command_line}` in {}",
            self.workspace_dir.display()
        );

        let mut cmd = if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(command_line);
            command
        } else {
            let mut command = Command::new("sh");
            command.arg("-c").arg(command_line);
            command
        };
        cmd.current_dir(&self.workspace_dir);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .map_err(|e| format!("failed to run `{command_line}`: {e}"))?;
        if !status.success() {
            warn!("build: `{command_line}` exited with {status}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn runs_in_workspace_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = BuildRunner::new(tmp.path().to_path_buf());
        runner.run_shell("pwd > cwd.txt").unwrap();

        let recorded = std::fs::read_to_string(tmp.path().join("cwd.txt")).unwrap();
        let recorded = std::path::Path::new(recorded.trim()).canonicalize().unwrap();
        assert_eq!(recorded, tmp.path().canonicalize().unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn tolerates_nonzero_exit() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = BuildRunner::new(tmp.path().to_path_buf());
        assert!(runner.run_shell("exit 1").is_ok());
    }

    #[test]
    fn fails_when_workspace_is_missing() {
        let runner = BuildRunner::new(PathBuf::from("/nonexistent/workspace"));
        assert!(runner.install_dependencies().is_err());
    }
}
