//! # File I/O Module
//!
//! Problem documents are JSON files, read once when a problem is opened.
//!
//! ## Example
//!
//! ```rust,no_run
//! use arena_core::file_io::load_problem;
//! use std::path::Path;
//!
//! let problem = load_problem(Path::new("demos/valid_parentheses.json"))?;
//! println!("{}", problem.title);
//! # Ok::<(), arena_core::errors::WorkspaceError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::errors::{WorkspaceError, WorkspaceResult};
use crate::problem::Problem;

/// Load a problem from a JSON file.
pub fn load_problem(path: &Path) -> WorkspaceResult<Problem> {
    let contents = fs::read_to_string(path)
        .map_err(|e| WorkspaceError::file_error("read", path.display().to_string(), e.to_string()))?;

    let problem: Problem =
        serde_json::from_str(&contents).map_err(|e| WorkspaceError::serialization(e.to_string()))?;

    tracing::info!(path = %path.display(), title = %problem.title, "loaded problem");
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_problem_with_starter_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reverse.json");
        fs::write(
            &path,
            r#"{"title": "Reverse String", "description": "Reverse it.", "starter_code": {"python": "def solve(s):\n    pass\n"}}"#,
        )
        .unwrap();

        let problem = load_problem(&path).unwrap();
        assert_eq!(problem.title, "Reverse String");
        assert_eq!(problem.statement, "Reverse it.");
        assert_eq!(problem.starter_code_for("python"), "def solve(s):\n    pass\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_problem(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_problem(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
