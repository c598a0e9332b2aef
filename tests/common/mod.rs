#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use raise3d::notify::{Notification, Notifier};
use raise3d::raise3d::{Client, Transport};
use raise3d::{Error, Result};
use serde_json::{json, Value};

pub const ADDR: &str = "printer.local:10800";

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone)]
enum Reply {
    Body(String),
    Refused,
}

#[derive(Default)]
struct State {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<Call>,
}

/// Answers by endpoint path. The last queued reply for an endpoint repeats.
#[derive(Clone, Default)]
pub struct StubTransport {
    state: Arc<Mutex<State>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, endpoint: &str, body: Value) -> &Self {
        self.push(endpoint, Reply::Body(body.to_string()))
    }

    pub fn respond_raw(&self, endpoint: &str, body: &str) -> &Self {
        self.push(endpoint, Reply::Body(body.to_string()))
    }

    pub fn refuse(&self, endpoint: &str) -> &Self {
        self.push(endpoint, Reply::Refused)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        let suffix = format!("/v1/{}", endpoint);
        self.calls()
            .iter()
            .filter(|call| call.url.ends_with(&suffix))
            .count()
    }

    fn push(&self, endpoint: &str, reply: Reply) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .entry(endpoint.to_string())
            .or_default()
            .push_back(reply);
        self
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });

        let endpoint = url.split("/v1/").nth(1).unwrap_or_default().to_string();
        let queue = state.replies.get_mut(&endpoint);
        let reply = match queue {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Refused) => Err(Error::TransportFailed("connection refused".into())),
            None => Err(Error::TransportFailed(
                format!("nothing stubbed for {}", endpoint).into(),
            )),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every attempt but reports each one as failed.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .map(|notification| notification.title)
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.failing {
            return Err(Error::NotificationFailed(500));
        }
        Ok(())
    }
}

pub fn login_ok(token: &str) -> Value {
    json!({"status": 1, "data": {"token": token}, "error": null})
}

pub fn job(progress: f64, status: &str) -> Value {
    json!({
        "status": 1,
        "data": {
            "file_name": "benchy.gcode",
            "print_progress": progress,
            "job_status": status,
            "printed_time": 120,
            "total_time": 600,
        },
    })
}

pub async fn logged_in(transport: &StubTransport) -> Client<StubTransport> {
    transport.respond("login", login_ok("abc123"));
    let mut client = Client::with_transport(ADDR, "secret", transport.clone());
    client.login().await.expect("stub login succeeds");
    client
}
