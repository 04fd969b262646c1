//! External command execution for the package manager.
//!
//! The core operation is a blocking run with fully captured output; the
//! TUI wraps it in a worker thread and polls the result over a channel.

use crate::domain::{CommandResult, PackageCommand};
use std::path::{Path, PathBuf};
use std::process::Command;
use tokio::sync::mpsc;

/// Runs the package manager executable against a project root
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
}

impl CommandRunner {
    /// Create a runner for the given executable name.
    ///
    /// The name is resolved through PATH by the OS; no shell is involved.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this runner invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the executable in `root`, blocking until it exits.
    ///
    /// Exit code zero maps to a successful result carrying stdout;
    /// a non-zero exit maps to a failed result carrying stderr. Launch
    /// failures (missing executable, invalid root) surface as a failed
    /// result with the error message, never as a raised fault. There is
    /// no timeout; the process must fully terminate first.
    pub fn run(&self, root: &Path, args: &[String]) -> CommandResult {
        tracing::debug!("Running {} {:?} in {}", self.program, args, root.display());

        match Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .output()
        {
            Ok(output) => {
                if output.status.success() {
                    CommandResult::ok(String::from_utf8_lossy(&output.stdout).into_owned())
                } else {
                    CommandResult::failed(String::from_utf8_lossy(&output.stderr).into_owned())
                }
            }
            Err(e) => CommandResult::failed(format!("Failed to run {}: {}", self.program, e)),
        }
    }

    /// Run a package command on a worker thread.
    ///
    /// The blocking `run` happens off the UI thread; the handle delivers
    /// the result once the process has terminated. Poll it with
    /// [`CommandHandle::try_finish`] from the event loop.
    pub fn spawn(&self, root: &Path, command: PackageCommand) -> CommandHandle {
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let runner = self.clone();
        let root: PathBuf = root.to_path_buf();

        std::thread::spawn(move || {
            let args: Vec<String> = command.args().iter().map(|s| s.to_string()).collect();
            let result = runner.run(&root, &args);
            let _ = result_tx.send(result);
        });

        CommandHandle { result_rx }
    }
}

/// Handle for a command running on a worker thread
pub struct CommandHandle {
    result_rx: mpsc::UnboundedReceiver<CommandResult>,
}

impl CommandHandle {
    /// Try to receive the finished result (non-blocking)
    pub fn try_finish(&mut self) -> Option<CommandResult> {
        self.result_rx.try_recv().ok()
    }
}

/// Probe an executable with `--version`.
///
/// Used at startup to verify the runtime and package manager are on PATH
/// before the terminal enters raw mode.
pub fn probe_version(program: &str) -> CommandResult {
    match Command::new(program).arg("--version").output() {
        Ok(output) if output.status.success() => {
            CommandResult::ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            CommandResult::failed(String::from_utf8_lossy(&output.stderr).trim().to_string())
        }
        Err(e) => CommandResult::failed(format!("{} not found: {}", program, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_run_success_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new("echo");

        let result = runner.run(temp.path(), &["hello".to_string()]);
        assert!(result.success);
        assert!(result.output.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_captures_stderr() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new("sh");

        let result = runner.run(
            temp.path(),
            &["-c".to_string(), "echo boom >&2; exit 1".to_string()],
        );
        assert!(!result.success);
        assert!(result.output.contains("boom"));
    }

    #[test]
    fn test_run_missing_executable() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new("definitely-not-a-real-binary-xyz");

        let result = runner.run(temp.path(), &["install".to_string()]);
        assert!(!result.success);
        assert!(!result.output.is_empty());
    }

    #[test]
    fn test_run_invalid_root() {
        let runner = CommandRunner::new("echo");

        let result = runner.run(Path::new("/nonexistent/scaffold-tui-root"), &[]);
        assert!(!result.success);
        assert!(!result.output.is_empty());
    }

    #[test]
    fn test_spawn_delivers_result() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new("echo");

        let mut handle = runner.spawn(temp.path(), PackageCommand::Install);

        let mut result = None;
        for _ in 0..100 {
            if let Some(r) = handle.try_finish() {
                result = Some(r);
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }

        let result = result.expect("command did not finish in time");
        assert!(result.success);
        assert!(result.output.contains("install"));
    }

    #[test]
    fn test_probe_version_missing_program() {
        let result = probe_version("definitely-not-a-real-binary-xyz");
        assert!(!result.success);
        assert!(result.output.contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_version_present_program() {
        let result = probe_version("echo");
        assert!(result.success);
    }
}
