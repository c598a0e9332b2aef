use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// How the client reaches the printer. Every request is a GET with query
/// parameters answered by a JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(query).send().await?;
        tracing::trace!("GET {} -> {}", url, response.status());
        // failures are reported inside the envelope, not via the HTTP status
        Ok(response.text().await?)
    }
}
