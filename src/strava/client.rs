use std::time::Duration;

use tracing::debug;

use super::types::Activity;
use crate::error::{Error, Result};

/// Strava's production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Activities listed per page. A single page is fetched per run.
const PER_PAGE: u32 = 200;

/// Client for the athlete activities resource.
pub struct ActivitiesClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ActivitiesClient {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the first page of the athlete's activities.
    pub async fn list_activities(&self, access_token: &str) -> Result<Vec<Activity>> {
        let url = format!("{}/athlete/activities", self.base_url);
        debug!("Fetching activities from {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("per_page", PER_PAGE), ("page", 1)])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Error::Connection(format!("Activity request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse activities response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ActivitiesClient {
        ActivitiesClient::new()
            .unwrap()
            .with_base_url(format!("{}/api/v3", server.uri()))
    }

    #[test]
    fn test_default_base_url() {
        let client = ActivitiesClient::new().unwrap();
        assert_eq!(client.base_url, "https://www.strava.com/api/v3");
    }

    #[tokio::test]
    async fn test_list_activities_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/athlete/activities"))
            .and(query_param("per_page", "200"))
            .and(query_param("page", "1"))
            .and(header("authorization", "Bearer tok1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Morning Run", "distance": 5000.0, "moving_time": 1800},
                {"name": "Evening Ride", "distance": 24120.5, "moving_time": 3661}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let activities = test_client(&mock_server)
            .list_activities("tok1")
            .await
            .unwrap();

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].name, "Morning Run");
        assert_eq!(activities[1].moving_time, 3661);
    }

    #[tokio::test]
    async fn test_list_activities_empty_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/athlete/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let activities = test_client(&mock_server)
            .list_activities("tok1")
            .await
            .unwrap();
        assert!(activities.is_empty());
    }

    #[tokio::test]
    async fn test_list_activities_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/athlete/activities"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Authorization Error"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = test_client(&mock_server).list_activities("stale").await;

        match result.unwrap_err() {
            Error::Http { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Authorization Error"));
            }
            other => panic!("Expected http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_activities_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/athlete/activities"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let result = test_client(&mock_server).list_activities("tok1").await;
        assert!(matches!(result.unwrap_err(), Error::Parse(_)));
    }
}
