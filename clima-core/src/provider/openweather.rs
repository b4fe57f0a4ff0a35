use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::model::{Coordinate, ForecastResponse};

use super::ForecastProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_forecast(&self, position: &Coordinate) -> Result<ForecastResponse> {
        let url = format!("{}/data/2.5/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", position.latitude.to_string()),
                ("lon", position.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        debug!(entries = parsed.list.len(), "Fetched forecast");

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FORECAST_BODY: &str = r#"{
        "list": [
            {
                "dt_txt": "2024-06-01 00:00:00",
                "main": { "temp": 300.0, "temp_min": 298.5, "temp_max": 301.2, "humidity": 40 },
                "weather": [ { "description": "clear sky", "icon": "01d" } ],
                "wind": { "speed": 3.4 },
                "visibility": 10000
            },
            {
                "dt_txt": "2024-06-01 03:00:00",
                "main": { "temp": 299.1, "temp_min": 297.0, "temp_max": 299.5, "humidity": 52 },
                "weather": [ { "description": "few clouds", "icon": "02n" } ],
                "wind": { "speed": 2.1 },
                "visibility": 10000
            }
        ]
    }"#;

    fn position() -> Coordinate {
        Coordinate {
            latitude: 4.6,
            longitude: -74.08,
        }
    }

    #[tokio::test]
    async fn fetch_parses_a_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("lat", "4.6"))
            .and(query_param("lon", "-74.08"))
            .and(query_param("appid", "KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FORECAST_BODY, "application/json"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri());
        let response = provider
            .fetch_forecast(&position())
            .await
            .expect("fetch should succeed");

        assert_eq!(response.list.len(), 2);
        assert_eq!(response.list[0].dt_txt, "2024-06-01 00:00:00");
        assert_eq!(response.list[0].main.temp, Some(300.0));
        assert_eq!(
            response.list[1].condition().map(|c| c.description.as_str()),
            Some("few clouds")
        );
    }

    #[tokio::test]
    async fn fetch_surfaces_http_errors_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_raw(r#"{"cod":401,"message":"Invalid API key"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("BAD".to_string(), server.uri());
        let err = provider.fetch_forecast(&position()).await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("failed with status 401"));
        assert!(msg.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn fetch_surfaces_parse_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri());
        let err = provider.fetch_forecast(&position()).await.unwrap_err();

        assert!(err.to_string().contains("Failed to parse OpenWeather forecast JSON"));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);

        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
