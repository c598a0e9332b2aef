use crate::raise3d::{JobInformation, JobStatus};

/// The tenth boundary at or above `progress`. A progress of zero aims at
/// the first tenth.
///
/// A progress sitting exactly on a tenth maps to itself, so a later poll
/// reporting the same value counts as reaching it again.
pub fn next_milestone(progress: f64) -> f64 {
    if progress == 0.0 {
        return 0.1;
    }
    (progress * 10.0).ceil() / 10.0
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    MilestoneReached {
        file_name: String,
        progress: f64,
        /// The boundary this poll reached.
        milestone: f64,
        /// Seconds.
        remaining: u64,
    },
    StatusChanged {
        file_name: String,
        status: JobStatus,
    },
}

/// What the poller remembers between cycles.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    last_status: Option<JobStatus>,
    next_milestone: Option<f64>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> Option<JobStatus> {
        self.last_status
    }

    pub fn next_milestone(&self) -> Option<f64> {
        self.next_milestone
    }

    /// Folds one poll into the tracker and returns what should be announced.
    pub fn observe(&mut self, job: &JobInformation) -> Vec<Event> {
        let mut events = Vec::new();
        let milestone = *self
            .next_milestone
            .get_or_insert_with(|| next_milestone(job.progress));

        if job.progress > 0.0 && job.progress >= milestone && job.status == JobStatus::Running {
            events.push(Event::MilestoneReached {
                file_name: job.file_name.clone(),
                progress: job.progress,
                milestone,
                remaining: job.remaining(),
            });
            self.next_milestone = Some(next_milestone(job.progress));
        }

        if self.last_status != Some(job.status) && job.status.is_halted() {
            events.push(Event::StatusChanged {
                file_name: job.file_name.clone(),
                status: job.status,
            });
        }

        self.last_status = Some(job.status);
        events
    }
}
