use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::ParseError;

/// Black-box parsing capability: produce a JSON AST dump for a source file.
///
/// Production code uses [`ClangFrontend`]; tests inject in-memory dumps,
/// which also serves as the parse-count instrumentation hook.
pub trait AstFrontend: Send + Sync {
    fn ast_dump(
        &self,
        path: &Path,
    ) -> Result<String, ParseError>;
}

/// Runs the Clang driver's AST dump with default compilation flags.
///
/// No include paths and no language-standard override: the caller accepts
/// default-dialect parsing of the file as it stands.
pub struct ClangFrontend {
    program: String,
}

impl Default for ClangFrontend {
    fn default() -> Self {
        Self::new("clang++")
    }
}

impl ClangFrontend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AstFrontend for ClangFrontend {
    fn ast_dump(
        &self,
        path: &Path,
    ) -> Result<String, ParseError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-fsyntax-only")
            .arg("-fno-color-diagnostics")
            .arg("-Xclang")
            .arg("-ast-dump=json")
            .arg(path);

        debug!("[ast-dump] {} {}", self.program, path.display());

        let output = command.output().map_err(|source| ParseError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.lines() {
                if line.contains("error:") {
                    warn!("[ast-dump] compiler error: {line}");
                }
            }
            debug!("[ast-dump] exited with non-zero status (partial AST may still be usable)");
        }

        let stdout = String::from_utf8(output.stdout).unwrap_or_default();
        if stdout.is_empty() || !stdout.starts_with('{') {
            return Err(ParseError::NoTree {
                path: path.to_path_buf(),
            });
        }

        debug!("[ast-dump] produced {} bytes of JSON for {}", stdout.len(), path.display());

        Ok(stdout)
    }
}

#[cfg(test)]
#[path = "../tests/src/frontend_tests.rs"]
mod tests;
