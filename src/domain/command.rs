//! Package manager command entity and related types.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Package manager operations the tool can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageCommand {
    Install,
    Dev,
}

impl PackageCommand {
    /// Argument vector passed to the package manager executable
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Install => &["install"],
            Self::Dev => &["run", "dev"],
        }
    }

    /// Get the display name for this command
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Install => "Install dependencies",
            Self::Dev => "Dev server",
        }
    }
}

impl std::fmt::Display for PackageCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of a fully terminated external command.
///
/// On success `output` holds captured stdout; on failure it holds captured
/// stderr or the launch-failure message. Callers must check `success`:
/// command failure is a value, not a raised fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
}

impl CommandResult {
    /// Build a successful result from captured stdout
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    /// Build a failed result from captured stderr or an error message
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Execution state of a package manager command
#[derive(Debug, Clone)]
pub enum ExecutionState {
    /// Command is queued but not started
    Pending,
    /// Command is currently running
    Running { started_at: Instant },
    /// Command terminated
    Completed { success: bool, duration: Duration },
}

impl ExecutionState {
    /// Check if the command is still running
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Check if the command has terminated
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Get status indicator for UI
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Pending => "⏳",
            Self::Running { .. } => "▶",
            Self::Completed { success: true, .. } => "✓",
            Self::Completed { success: false, .. } => "✗",
        }
    }
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self::Pending
    }
}

/// A package manager command being executed
#[derive(Debug, Clone)]
pub struct CommandRun {
    /// Which command is running
    pub command: PackageCommand,
    /// Current execution state
    pub state: ExecutionState,
}

impl CommandRun {
    /// Create a new pending command run
    pub fn new(command: PackageCommand) -> Self {
        Self {
            command,
            state: ExecutionState::Pending,
        }
    }

    /// Mark the command as running
    pub fn start(&mut self) {
        self.state = ExecutionState::Running {
            started_at: Instant::now(),
        };
    }

    /// Mark the command as terminated
    pub fn complete(&mut self, success: bool) {
        if let ExecutionState::Running { started_at } = self.state {
            self.state = ExecutionState::Completed {
                success,
                duration: started_at.elapsed(),
            };
        } else {
            self.state = ExecutionState::Completed {
                success,
                duration: Duration::ZERO,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args() {
        assert_eq!(PackageCommand::Install.args(), &["install"]);
        assert_eq!(PackageCommand::Dev.args(), &["run", "dev"]);
    }

    #[test]
    fn test_execution_state_transitions() {
        let mut run = CommandRun::new(PackageCommand::Install);
        assert!(matches!(run.state, ExecutionState::Pending));

        run.start();
        assert!(run.state.is_running());

        run.complete(true);
        assert!(run.state.is_finished());
        assert_eq!(run.state.indicator(), "✓");
    }

    #[test]
    fn test_command_result_constructors() {
        let ok = CommandResult::ok("added 12 packages");
        assert!(ok.success);
        assert_eq!(ok.output, "added 12 packages");

        let failed = CommandResult::failed("npm ERR! missing script: dev");
        assert!(!failed.success);
    }
}
