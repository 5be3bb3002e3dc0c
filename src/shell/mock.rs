//! Recording command runner for tests.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every invocation, can fail commands that match a pattern, and can
//! materialize a checkout when it sees `git clone` so later steps have a
//! `setup.py` to patch.
//!
//! # Example
//!
//! ```
//! use benchenv::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().fail_on("pip install");
//! assert!(runner.run("git", &["pull"], None).is_ok());
//! assert!(runner.run("python3", &["-m", "pip", "install", "."], None).is_err());
//! assert_eq!(runner.rendered(), ["git pull", "python3 -m pip install ."]);
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

use super::command::display_command;
use super::runner::CommandRunner;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl RecordedCommand {
    /// Program and arguments joined with spaces.
    pub fn rendered(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        display_command(&self.program, &args)
    }
}

/// Command runner that records instead of executing.
#[derive(Debug, Default)]
pub struct MockRunner {
    calls: RefCell<Vec<RecordedCommand>>,
    fail_on: Option<String>,
    clone_setup_py: Option<String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail (exit code 1) any command whose rendered form contains `pattern`.
    pub fn fail_on(mut self, pattern: &str) -> Self {
        self.fail_on = Some(pattern.to_string());
        self
    }

    /// On `git clone <url> <path>`, create `<path>/setup.py` with `contents`.
    pub fn with_clone_contents(mut self, contents: &str) -> Self {
        self.clone_setup_py = Some(contents.to_string());
        self
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.borrow().clone()
    }

    /// All recorded invocations rendered as command lines.
    pub fn rendered(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.rendered()).collect()
    }

    fn materialize_clone(&self, args: &[&str]) -> Result<()> {
        let (Some(contents), ["clone", _url, path]) = (&self.clone_setup_py, args) else {
            return Ok(());
        };
        let checkout = Path::new(path);
        fs::create_dir_all(checkout)?;
        fs::write(checkout.join("setup.py"), contents)?;
        Ok(())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let call = RecordedCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(|p| p.to_path_buf()),
        };
        let rendered = call.rendered();
        self.calls.borrow_mut().push(call);

        if let Some(pattern) = &self.fail_on {
            if rendered.contains(pattern.as_str()) {
                return Err(BenchError::CommandFailed {
                    command: rendered,
                    code: Some(1),
                });
            }
        }

        if program == "git" {
            self.materialize_clone(args)?;
        }
        Ok(())
    }
}
