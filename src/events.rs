// src/events.rs

//! Job lifecycle events as delivered by the platform's event stream.

use serde::Deserialize;

use crate::types::{AppId, JobId, JobState, JobType};

/// One lifecycle transition of a job.
///
/// Created by the platform and delivered once per transition in
/// per-application order. The matcher discards each event once consumed and
/// never retains it beyond the current wait.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEvent {
    pub job_id: JobId,
    pub job_type: JobType,
    pub app_id: AppId,
    pub state: JobState,
}

impl JobEvent {
    pub fn new(
        job_id: impl Into<JobId>,
        job_type: impl Into<JobType>,
        app_id: impl Into<AppId>,
        state: JobState,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            job_type: job_type.into(),
            app_id: app_id.into(),
            state,
        }
    }
}
