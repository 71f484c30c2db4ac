//! Package lookup through a Python interpreter.

use crate::error::{NbdepsError, Result};
use crate::process::{execute, CommandOptions};

use super::PackageIndex;

/// Exit code the lookup script uses for "not installed".
const NOT_FOUND_EXIT: i32 = 3;

const LOOKUP_SCRIPT: &str = "\
import sys
from importlib import metadata
try:
    print(metadata.version(sys.argv[1]))
except metadata.PackageNotFoundError:
    sys.exit(3)
";

/// Queries `importlib.metadata.version` in a Python interpreter.
#[derive(Debug, Clone)]
pub struct InterpreterIndex {
    python: String,
}

impl InterpreterIndex {
    /// Create an index backed by the given interpreter.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Interpreter this index runs.
    pub fn python(&self) -> &str {
        &self.python
    }

    fn unavailable(&self, message: impl Into<String>) -> NbdepsError {
        NbdepsError::InterpreterUnavailable {
            python: self.python.clone(),
            message: message.into(),
        }
    }
}

impl PackageIndex for InterpreterIndex {
    fn installed_version(&self, module: &str) -> Result<Option<String>> {
        let result = execute(
            &self.python,
            &["-c", LOOKUP_SCRIPT, module],
            &CommandOptions::captured(),
        )
        .map_err(|_| self.unavailable("could not be started"))?;

        if result.success {
            let version = result.stdout.trim().to_string();
            tracing::debug!("{} is installed at {}", module, version);
            return Ok(Some(version));
        }

        match result.exit_code {
            Some(NOT_FOUND_EXIT) => {
                tracing::debug!("{} is not installed", module);
                Ok(None)
            }
            code => Err(self.unavailable(format!(
                "metadata lookup for '{}' exited with {:?}: {}",
                module,
                code,
                result.stderr.trim()
            ))),
        }
    }
}
