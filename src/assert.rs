// src/assert.rs

//! Output predicates over [`ProcessResult`].
//!
//! Pure `bool` predicates: the calling test owns the actual assertion, and
//! with it the mismatch report. stdout and stderr are checked separately,
//! matching how the harness captures them.

use regex::Regex;

use crate::errors::Result;
use crate::exec::ProcessResult;

/// Normal exit with code zero.
pub fn succeeds(result: &ProcessResult) -> bool {
    result.success()
}

/// Exact stdout match.
pub fn outputs(result: &ProcessResult, expected: &str) -> bool {
    result.stdout_str() == expected
}

/// stdout contains `needle`.
pub fn output_contains(result: &ProcessResult, needle: &str) -> bool {
    result.stdout_str().contains(needle)
}

/// stdout matches `pattern`. The pattern is compiled per call; an invalid
/// pattern is an error rather than a silent non-match.
pub fn output_matches(result: &ProcessResult, pattern: &str) -> Result<bool> {
    let re = Regex::new(pattern).map_err(anyhow::Error::from)?;
    Ok(re.is_match(&result.stdout_str()))
}

/// Exact stderr match.
pub fn stderr_outputs(result: &ProcessResult, expected: &str) -> bool {
    result.stderr_str() == expected
}

/// stderr contains `needle`.
pub fn stderr_contains(result: &ProcessResult, needle: &str) -> bool {
    result.stderr_str().contains(needle)
}
