//! Node API forwards source
//!
//! Endpoint: `GET {base_url}/forwards?days={days}`
//! Returns: JSON array of forwarding events

use super::{check_window, ForwardSource};
use crate::error::SourceError;
use crate::forward_core::ForwardingEvent;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpForwardSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpForwardSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn forwards_url(&self) -> String {
        format!("{}/forwards", self.base_url)
    }
}

#[async_trait]
impl ForwardSource for HttpForwardSource {
    async fn fetch_forwards(&self, days: u32) -> Result<Vec<ForwardingEvent>, SourceError> {
        check_window(days)?;

        let mut request = self
            .client
            .get(self.forwards_url())
            .query(&[("days", days)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let events: Vec<ForwardingEvent> = serde_json::from_str(&body)?;

        log::debug!("Fetched {} forwards from {}", events.len(), self.base_url);
        Ok(events)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_forwards_url_trims_slash() {
        let source = HttpForwardSource::new("http://localhost:3000/api/", None).unwrap();
        assert_eq!(source.forwards_url(), "http://localhost:3000/api/forwards");
    }

    #[tokio::test]
    async fn test_fetch_forwards() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forwards"))
            .and(query_param("days", "7"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"channel": "A", "alias": "alpha", "incoming": 30, "outgoing": 10},
                {"channel": "B", "alias": "bravo", "incoming": 70, "outgoing": 90}
            ])))
            .mount(&server)
            .await;

        let source = HttpForwardSource::new(&server.uri(), Some("secret".to_string())).unwrap();
        let events = source.fetch_forwards(7).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1], ForwardingEvent::new("B", "bravo", 70, 90));
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forwards"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = HttpForwardSource::new(&server.uri(), None).unwrap();
        let result = source.fetch_forwards(1).await;

        assert!(matches!(result, Err(SourceError::Status { status: 500 })));
    }

    #[tokio::test]
    async fn test_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forwards"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"errors\":[]}"))
            .mount(&server)
            .await;

        let source = HttpForwardSource::new(&server.uri(), None).unwrap();
        let result = source.fetch_forwards(3).await;

        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[tokio::test]
    async fn test_zero_days_rejected() {
        let source = HttpForwardSource::new("http://127.0.0.1:9", None).unwrap();
        let result = source.fetch_forwards(0).await;

        assert!(matches!(result, Err(SourceError::InvalidWindow { days: 0 })));
    }
}
