use serde::de::DeserializeOwned;

use super::api::{
    BasicInformation, Envelope, JobInformation, LoginData, RunningStatus, SystemInformation,
};
use super::client_builder::ClientBuilder;
use super::signature::{signature, timestamp_millis};
use super::transport::{HttpTransport, Transport};
use crate::error::{Error, Result};

const LOGIN: &str = "login";
const SYSTEM: &str = "printer/system";
const RUNNING_STATUS: &str = "printer/runningstatus";
const BASIC: &str = "printer/basic";
const CURRENT_JOB: &str = "job/currentjob";

/// A session with one printer.
pub struct Client<T = HttpTransport> {
    transport: T,
    base_url: String,
    password: String,
    token: Option<String>,
}

impl Client {
    pub fn builder(addr: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(addr, password)
    }
}

impl<T: Transport> Client<T> {
    /// A session that has not logged in yet.
    pub fn with_transport(
        addr: impl AsRef<str>,
        password: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            transport,
            base_url: format!("http://{}/v1/", addr.as_ref()),
            password: password.into(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::NotAuthenticated)
    }

    pub async fn login(&mut self) -> Result<()> {
        let timestamp = timestamp_millis();
        let sign = signature(&self.password, timestamp);
        let timestamp = timestamp.to_string();

        let body = self
            .transport
            .get(
                &self.url(LOGIN),
                &[("sign", sign.as_str()), ("timestamp", timestamp.as_str())],
            )
            .await?;

        let response: Envelope<LoginData> = serde_json::from_str(&body)
            .map_err(|err| Error::AuthenticationFailed(format!("malformed response: {}", err)))?;
        let success = response.is_success();
        match (success, response.data) {
            (true, Some(LoginData { token })) => {
                tracing::debug!("logged in to {}", self.base_url);
                self.token = Some(token);
                Ok(())
            }
            _ => Err(Error::AuthenticationFailed(match response.error {
                Some(error) if !error.msg.is_empty() => error.msg,
                _ => format!("printer answered with status {}", response.status),
            })),
        }
    }

    pub async fn fetch_system_information(&self) -> Result<SystemInformation> {
        self.fetch(SYSTEM).await
    }

    pub async fn fetch_running_status(&self) -> Result<RunningStatus> {
        self.fetch(RUNNING_STATUS).await
    }

    pub async fn fetch_basic_information(&self) -> Result<BasicInformation> {
        self.fetch(BASIC).await
    }

    pub async fn fetch_job_information(&self) -> Result<JobInformation> {
        self.fetch(CURRENT_JOB).await
    }

    async fn fetch<D>(&self, endpoint: &'static str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let token = self.token()?;
        tracing::debug!("fetching {}", endpoint);
        let body = self
            .transport
            .get(&self.url(endpoint), &[("token", token)])
            .await?;
        decode(endpoint, &body)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Checks the envelope before the payload so a failed request is reported
/// as such even when its payload would not decode.
pub(crate) fn decode<D>(endpoint: &'static str, body: &str) -> Result<D>
where
    D: DeserializeOwned,
{
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(body)?;
    let status = envelope.status;
    let data = envelope
        .data
        .filter(|data| status == 1 && !data.is_null());
    match data {
        Some(data) => Ok(serde_json::from_value(data)?),
        None => Err(Error::RequestFailed {
            endpoint,
            status,
            message: envelope
                .error
                .map(|error| error.msg)
                .filter(|msg| !msg.is_empty()),
        }),
    }
}
