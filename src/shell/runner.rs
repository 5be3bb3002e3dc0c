//! Fail-fast command runner used by the installer.
//!
//! [`CommandRunner`] is the seam between install orchestration and the
//! processes it drives. Production code uses [`SystemRunner`]; tests swap
//! in a recorder.

use std::path::Path;

use crate::error::{BenchError, Result};

use super::command::{display_command, execute, CommandOptions};

/// Runs an external program to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, optionally inside `cwd`.
    ///
    /// Output goes straight to the terminal. Returns
    /// [`BenchError::CommandFailed`] when the program cannot be started or
    /// exits non-zero.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()>;
}

/// Runs commands as real child processes with inherited stdio and environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let options = CommandOptions {
            cwd: cwd.map(|p| p.to_path_buf()),
            ..Default::default()
        };

        let result = execute(program, args, &options)?;
        if result.success {
            Ok(())
        } else {
            Err(BenchError::CommandFailed {
                command: display_command(program, args),
                code: result.exit_code,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn system_runner_succeeds_on_zero_exit() {
        assert!(SystemRunner.run("true", &[], None).is_ok());
    }

    #[test]
    fn system_runner_reports_exit_code() {
        let err = SystemRunner.run("sh", &["-c", "exit 7"], None).unwrap_err();

        match err {
            BenchError::CommandFailed { command, code } => {
                assert_eq!(command, "sh -c exit 7");
                assert_eq!(code, Some(7));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn system_runner_uses_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();

        SystemRunner
            .run("sh", &["-c", "touch marker"], Some(temp.path()))
            .unwrap();

        assert!(temp.path().join("marker").exists());
    }
}
