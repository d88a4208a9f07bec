//! Literal token replacement in the scaffolded project's files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Replace every `token` in `file` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub token: String,
    pub replacement: String,
    /// Relative to the project root.
    pub file: PathBuf,
}

impl Substitution {
    pub fn new<P: Into<PathBuf>>(token: &str, replacement: &str, file: P) -> Self {
        Self { token: token.to_string(), replacement: replacement.to_string(), file: file.into() }
    }

    /// Rewrites the target file in place and returns how many tokens were replaced.
    ///
    /// A file without the token is left untouched and yields `Ok(0)`.
    pub fn apply<P: AsRef<Path>>(&self, root: P) -> Result<usize> {
        let path = root.as_ref().join(&self.file);
        let io_error = |source| Error::SubstitutionError { file: path.clone(), source };

        let content = std::fs::read_to_string(&path).map_err(io_error)?;
        let count = content.matches(self.token.as_str()).count();
        if count == 0 {
            return Ok(0);
        }

        std::fs::write(&path, content.replace(&self.token, &self.replacement))
            .map_err(io_error)?;
        Ok(count)
    }
}

/// Applies every substitution, logging failures instead of returning them.
///
/// Returns the number of files that were rewritten.
pub fn apply_all<P: AsRef<Path>>(root: P, substitutions: &[Substitution]) -> usize {
    let root = root.as_ref();
    let mut rewritten = 0;
    for substitution in substitutions {
        match substitution.apply(root) {
            Ok(0) => log::debug!(
                "No '{}' left in {}",
                substitution.token,
                substitution.file.display()
            ),
            Ok(count) => {
                log::info!(
                    "Replaced {count} x '{}' in {}",
                    substitution.token,
                    substitution.file.display()
                );
                rewritten += 1;
            }
            Err(e) => log::warn!("{e}"),
        }
    }
    rewritten
}
