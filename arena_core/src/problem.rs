//! # Problem Documents
//!
//! A problem as supplied by the data-loading side: a title, the raw
//! statement markup (untrusted, sanitized before display) and optional
//! starter code keyed by language value.
//!
//! ## Example
//!
//! ```rust
//! use arena_core::problem::Problem;
//!
//! let problem = Problem::new("Two Sum", "Return the indices of two numbers.");
//! let json = serde_json::to_string(&problem).unwrap();
//! assert!(json.contains("Two Sum"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sanitize::{sanitize, SafeContent};

/// File extension for problem documents
pub const PROBLEM_EXTENSION: &str = "json";

/// A problem statement plus per-language starter code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    /// Raw markdown with optional inline HTML
    #[serde(alias = "description", alias = "descriptionText")]
    pub statement: String,
    /// Starter code keyed by language registry value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub starter_code: BTreeMap<String, String>,
}

impl Problem {
    pub fn new(title: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            statement: statement.into(),
            starter_code: BTreeMap::new(),
        }
    }

    pub fn with_starter_code(mut self, language: impl Into<String>, code: impl Into<String>) -> Self {
        self.starter_code.insert(language.into(), code.into());
        self
    }

    /// Starter code for a language, empty if none was supplied
    pub fn starter_code_for(&self, language: &str) -> &str {
        self.starter_code.get(language).map(String::as_str).unwrap_or_default()
    }

    /// Sanitized statement, ready for the markdown renderer
    pub fn safe_statement(&self) -> SafeContent {
        sanitize(&self.statement)
    }

    /// Bundled problem shown when nothing else is loaded
    pub fn sample() -> Self {
        Problem::new("Two Sum", SAMPLE_STATEMENT)
            .with_starter_code(
                "javascript",
                "function twoSum(nums, target) {\n    // your code here\n}\n",
            )
            .with_starter_code(
                "python",
                "def two_sum(nums: list[int], target: int) -> list[int]:\n    pass\n",
            )
            .with_starter_code(
                "java",
                "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        return new int[0];\n    }\n}\n",
            )
            .with_starter_code(
                "c_cpp",
                "#include <vector>\n\nstd::vector<int> twoSum(std::vector<int>& nums, int target) {\n    return {};\n}\n",
            )
    }
}

const SAMPLE_STATEMENT: &str = r#"# Two Sum

Given an array of integers `nums` and an integer `target`, return the
*indices* of the two numbers such that they add up to `target`.

You may assume that each input has **exactly one** solution, and you may not
use the same element twice.

## Example

```
Input: nums = [2, 7, 11, 15], target = 9
Output: [0, 1]
```

## Constraints

- `2 ≤ nums.length ≤ 10^4`
- `-10^9 ≤ nums[i] ≤ 10^9`
- Only one valid answer exists.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_code_lookup() {
        let problem = Problem::sample();
        assert!(problem.starter_code_for("python").contains("def two_sum"));
        assert_eq!(problem.starter_code_for("cobol"), "");
    }

    #[test]
    fn test_description_alias() {
        let json = r#"{"title": "Echo", "descriptionText": "<p>say it back</p>"}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.statement, "<p>say it back</p>");
        assert!(problem.starter_code.is_empty());
    }

    #[test]
    fn test_safe_statement_strips_scripts() {
        let problem = Problem::new("X", "<script>alert(1)</script>Read **carefully**.");
        let safe = problem.safe_statement();
        assert_eq!(safe.as_str(), "Read **carefully**.");
    }

    #[test]
    fn test_sample_statement_survives_sanitization() {
        let problem = Problem::sample();
        let safe = problem.safe_statement();
        assert!(safe.as_str().starts_with("# Two Sum"));
        assert!(safe.as_str().contains("## Constraints"));
    }
}
