use async_trait::async_trait;

use super::{Notification, Notifier};
use crate::error::{Error, Result};

pub const SEND_URL: &str = "https://alertzy.app/send";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Alertzy account key.
    pub key: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    key: String,
    url: String,
}

impl Client {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            key: key.into(),
            url: SEND_URL.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = Self::new(config.key.clone());
        match &config.url {
            Some(url) => client.url(url.clone()),
            None => client,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The form POST for `notification`, ready to execute.
    pub fn request(&self, notification: &Notification) -> Result<reqwest::Request> {
        let mut form = vec![
            ("accountKey", self.key.as_str()),
            ("title", notification.title.as_str()),
        ];
        if let Some(message) = notification.message.as_deref() {
            form.push(("message", message));
        }
        Ok(self.http.post(&self.url).form(&form).build()?)
    }
}

#[async_trait]
impl Notifier for Client {
    async fn send(&self, notification: &Notification) -> Result<()> {
        let request = self.request(notification)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        tracing::debug!("notification send status: {}", status);
        if !status.is_success() {
            return Err(Error::NotificationFailed(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(request: &reqwest::Request) -> String {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("form body is buffered");
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn posts_url_encoded_form() {
        let client = Client::new("acc-key");
        let request = client
            .request(&Notification::new("Printer Progress").message("45.0%, 0:02:00 remaining"))
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), SEND_URL);
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            body(&request),
            "accountKey=acc-key&title=Printer+Progress&message=45.0%25%2C+0%3A02%3A00+remaining"
        );
    }

    #[test]
    fn message_is_optional() {
        let client = Client::new("k").url("http://localhost:9/send");
        let request = client.request(&Notification::new("Done")).unwrap();
        assert_eq!(body(&request), "accountKey=k&title=Done");
        assert_eq!(request.url().as_str(), "http://localhost:9/send");
    }
}
