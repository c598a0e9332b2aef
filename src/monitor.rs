//! Polls the current job and announces progress milestones and halts.

use std::future::Future;
use std::time::Duration;

use tokio::select;

use crate::notify::{Notification, Notifier};
use crate::raise3d::{Client, HttpTransport, Transport};
use crate::report::format_percent;

pub use self::milestone::{next_milestone, Event, Tracker};

mod message;
mod milestone;

pub const DEFAULT_INTERVAL: u64 = 10;
const MIN_INTERVAL: u64 = 1;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Seconds between polls.
    #[serde(default = "default_interval")]
    pub interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL
}

pub struct Service<T = HttpTransport> {
    client: Client<T>,
    notifier: Option<Box<dyn Notifier>>,
    interval: Duration,
    tracker: Tracker,
}

impl<T: Transport> Service<T> {
    /// Intervals below one second are raised to one second.
    pub fn new(client: Client<T>, config: &Config) -> Self {
        if config.interval < MIN_INTERVAL {
            tracing::warn!(
                "poll interval {}s is too short, using {}s",
                config.interval,
                MIN_INTERVAL
            );
        }
        Self {
            client,
            notifier: None,
            interval: Duration::from_secs(config.interval.max(MIN_INTERVAL)),
            tracker: Tracker::new(),
        }
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Polls until `shutdown` resolves. Failures inside a cycle are logged
    /// and the next cycle runs on schedule.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) {
        tracing::info!(
            "monitoring {} every {}s",
            self.client.base_url(),
            self.interval.as_secs()
        );
        let poll = async {
            loop {
                self.cycle().await;
                tokio::time::sleep(self.interval).await;
            }
        };
        select! {
            _ = poll => {},
            _ = shutdown => {
                tracing::info!("monitoring stopped");
            },
        }
    }

    /// One poll: fetch the job, update the tracker, send what it reports.
    pub async fn cycle(&mut self) {
        let job = match self.client.fetch_job_information().await {
            Ok(job) => job,
            Err(err) => {
                tracing::error!("error monitoring: {}", err);
                return;
            }
        };
        tracing::debug!(
            "{}: {} {}",
            job.file_name,
            job.status,
            format_percent(job.progress)
        );

        for event in self.tracker.observe(&job) {
            match &event {
                Event::MilestoneReached {
                    progress,
                    milestone,
                    ..
                } => tracing::info!(
                    "progress: {} (milestone: {})",
                    format_percent(*progress),
                    format_percent(*milestone)
                ),
                Event::StatusChanged { status, file_name } => {
                    tracing::info!("{} is {}", file_name, status)
                }
            }
            self.notify(Notification::from(&event)).await;
        }
    }

    async fn notify(&self, notification: Notification) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        if let Err(err) = notifier.send(&notification).await {
            tracing::warn!("failed to send notification {:?}: {}", notification.title, err);
        }
    }
}
