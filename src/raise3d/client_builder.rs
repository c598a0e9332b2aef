use std::{
    future::{Future, IntoFuture},
    pin::Pin,
    time::Duration,
};

use super::{client::Client, transport::HttpTransport, Config};
use crate::error::{Error, Result};

/// Resolves to a logged-in [`Client`] when awaited.
pub struct ClientBuilder {
    addr: String,
    password: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new(addr: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            addr: addr.into(),
            password: password.into(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn config(self, config: &Config) -> Self {
        match config.timeout {
            Some(secs) => self.timeout(Duration::from_secs(secs)),
            None => self,
        }
    }
}

impl IntoFuture for ClientBuilder {
    type Output = Result<Client>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let transport = HttpTransport::new(self.timeout)?;
            let mut client = Client::with_transport(&self.addr, self.password, transport);
            client.login().await.inspect_err(|err| {
                if !matches!(err, Error::TransportFailed(_)) {
                    tracing::warn!("printer at {} refused login", self.addr);
                }
            })?;

            Ok(client)
        })
    }
}
