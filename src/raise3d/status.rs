use core::fmt;
use std::fmt::{Display, Formatter};

use super::api::{JobStatus, PrinterState};

impl PrinterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Paused => "paused",
            Self::Running => "running",
            Self::Busy => "busy",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl Display for PrinterState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paused => "paused",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Stopped => "stopped",
        }
    }

    /// Statuses worth telling someone about when a job enters them.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Paused | Self::Stopped | Self::Completed)
    }
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
