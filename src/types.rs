// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Opaque identifier of one scheduled unit.
///
/// Stable for the lifetime of a job and unique per application instance at a
/// point in time, but the platform's numbering scheme may reuse ids across
/// different jobs, so never assume global uniqueness.
pub type JobId = String;

/// Named process category a job belongs to, as defined by an application's
/// release. This is the matching key of an expectation table.
pub type JobType = String;

/// The logical deployable unit whose jobs are being observed.
pub type AppId = String;

/// Lifecycle state carried by a job event.
///
/// The platform emits more states than the matcher cares about (`crashed`,
/// restart/backoff churn, ...). Everything that is not literally `up` or
/// `down` is kept as [`JobState::Other`] and ignored during matching, never
/// treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum JobState {
    Up,
    Down,
    Other(String),
}

impl From<String> for JobState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "up" => JobState::Up,
            "down" => JobState::Down,
            _ => JobState::Other(s),
        }
    }
}

impl FromStr for JobState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JobState::from(s.to_string()))
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Up => f.write_str("up"),
            JobState::Down => f.write_str("down"),
            JobState::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_parse() {
        assert_eq!("up".parse::<JobState>().unwrap(), JobState::Up);
        assert_eq!("down".parse::<JobState>().unwrap(), JobState::Down);
    }

    #[test]
    fn unknown_states_are_kept_lossless() {
        let state: JobState = "crashed".parse().unwrap();
        assert_eq!(state, JobState::Other("crashed".to_string()));
        assert_eq!(state.to_string(), "crashed");
    }
}
