use super::milestone::Event;
use crate::notify::Notification;
use crate::raise3d::JobStatus;
use crate::report::{format_duration, format_percent};

impl From<&Event> for Notification {
    fn from(event: &Event) -> Self {
        match event {
            Event::MilestoneReached {
                progress,
                remaining,
                ..
            } => Notification::new("Printer Progress").message(format!(
                "{}, {} remaining",
                format_percent(*progress),
                format_duration(*remaining)
            )),
            Event::StatusChanged { status, .. } => {
                let title = match status {
                    JobStatus::Paused => "Printer has Paused",
                    JobStatus::Completed => "Print Completed",
                    JobStatus::Stopped | JobStatus::Running => "Printer has Stopped",
                };
                Notification::new(title).message(format!("Printer is {}", status))
            }
        }
    }
}
