//! Replicate prediction client for banner image generation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::ports::{BannerPort, BannerRequest};

/// Stable Diffusion version the banner predictions run against.
const MODEL_VERSION: &str = "db21e45d3f7023abc2a46ee38a23973f6dce16bb082a930b0c49861f96d1e5bf";

/// Replicate API endpoint and polling configuration.
#[derive(Debug, Clone)]
pub struct ReplicateApiConfig {
    /// Predictions endpoint URL.
    pub predictions_url: String,
    /// Delay between status polls in milliseconds.
    pub poll_interval_ms: u64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ReplicateApiConfig {
    fn default() -> Self {
        Self {
            predictions_url: "https://api.replicate.com/v1/predictions".to_string(),
            poll_interval_ms: 1000,
            timeout_secs: 60,
        }
    }
}

/// HTTP client for the Replicate predictions API.
///
/// Polling until the prediction resolves is internal to this collaborator;
/// callers see a single blocking `generate` call.
#[derive(Clone)]
pub struct HttpReplicateClient {
    token: String,
    predictions_url: Url,
    poll_interval_ms: u64,
    client: Client,
}

impl std::fmt::Debug for HttpReplicateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReplicateClient")
            .field("predictions_url", &self.predictions_url)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpReplicateClient {
    /// Create a new client with the given API token and configuration.
    pub fn new(token: String, config: &ReplicateApiConfig) -> Result<Self, AppError> {
        let predictions_url = Url::parse(&config.predictions_url)
            .map_err(|e| AppError::Configuration(format!("Invalid Replicate API URL: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, predictions_url, poll_interval_ms: config.poll_interval_ms, client })
    }

    fn poll(&self, url: &str) -> Result<Prediction, AppError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .map_err(|e| AppError::Generation(format!("Status poll failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Generation(format!("Status poll error ({})", status.as_u16())));
        }

        response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse prediction: {}", e)))
    }
}

#[derive(Debug, Serialize)]
struct PredictionCreate<'a> {
    version: &'a str,
    input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    negative_prompt: &'a str,
    width: u32,
    height: u32,
    num_inference_steps: u32,
    guidance_scale: f32,
    num_outputs: u32,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    status: String,
    #[serde(default)]
    output: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    urls: Option<PredictionUrls>,
}

#[derive(Debug, Deserialize)]
struct PredictionUrls {
    get: String,
}

impl BannerPort for HttpReplicateClient {
    fn generate(&self, request: &BannerRequest) -> Result<String, AppError> {
        let body = PredictionCreate {
            version: MODEL_VERSION,
            input: PredictionInput {
                prompt: &request.prompt,
                negative_prompt: &request.negative_prompt,
                width: request.width,
                height: request.height,
                num_inference_steps: request.steps,
                guidance_scale: request.guidance_scale,
                num_outputs: 1,
            },
        };

        let response = self
            .client
            .post(self.predictions_url.clone())
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!(
                "API error ({}): {}",
                status.as_u16(),
                text.trim()
            )));
        }

        let mut prediction: Prediction = response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse prediction: {}", e)))?;

        let poll_url = prediction
            .urls
            .as_ref()
            .map(|urls| urls.get.clone())
            .ok_or_else(|| AppError::Generation("No polling URL in prediction".to_string()))?;

        loop {
            match prediction.status.as_str() {
                "succeeded" => {
                    return prediction
                        .output
                        .as_ref()
                        .and_then(|output| output.first())
                        .cloned()
                        .ok_or_else(|| {
                            AppError::Generation("Prediction succeeded without output".to_string())
                        });
                }
                "failed" | "canceled" => {
                    return Err(AppError::Generation(
                        prediction
                            .error
                            .clone()
                            .unwrap_or_else(|| format!("Prediction {}", prediction.status)),
                    ));
                }
                _ => {
                    std::thread::sleep(Duration::from_millis(self.poll_interval_ms));
                    prediction = self.poll(&poll_url)?;
                }
            }
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Download(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Download(format!("HTTP {}", status.as_u16())));
        }

        let bytes = response.bytes().map_err(|e| AppError::Download(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> HttpReplicateClient {
        let config = ReplicateApiConfig {
            predictions_url: format!("{}/predictions", server.url()),
            poll_interval_ms: 1,
            timeout_secs: 1,
        };
        HttpReplicateClient::new("fake-token".to_string(), &config).unwrap()
    }

    fn create_body(server: &mockito::Server, status: &str) -> String {
        format!(
            r#"{{"id": "p1", "status": "{status}", "urls": {{"get": "{}/predictions/p1"}}}}"#,
            server.url()
        )
    }

    #[test]
    fn generate_polls_until_succeeded() {
        let mut server = mockito::Server::new();
        let create = server
            .mock("POST", "/predictions")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(create_body(&server, "starting"))
            .expect(1)
            .create();
        let poll = server
            .mock("GET", "/predictions/p1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "succeeded", "output": ["https://img.example/banner.png"]}"#)
            .expect(1)
            .create();

        let url = client_for(&server)
            .generate(&BannerRequest::for_repository("demo-repo"))
            .unwrap();
        assert_eq!(url, "https://img.example/banner.png");
        create.assert();
        poll.assert();
    }

    #[test]
    fn failed_prediction_reports_the_model_error() {
        let mut server = mockito::Server::new();
        let _create = server
            .mock("POST", "/predictions")
            .with_status(201)
            .with_body(create_body(&server, "starting"))
            .create();
        let _poll = server
            .mock("GET", "/predictions/p1")
            .with_status(200)
            .with_body(r#"{"status": "failed", "error": "NSFW content detected"}"#)
            .create();

        let result = client_for(&server).generate(&BannerRequest::for_repository("demo-repo"));
        match result {
            Err(AppError::Generation(message)) => assert_eq!(message, "NSFW content detected"),
            other => panic!("expected Generation, got {other:?}"),
        }
    }

    #[test]
    fn rejected_prediction_fails_fast() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/predictions")
            .with_status(422)
            .with_body("Invalid version")
            .expect(1)
            .create();

        let result = client_for(&server).generate(&BannerRequest::for_repository("demo-repo"));
        assert!(matches!(result, Err(AppError::Generation(_))));
        mock.assert();
    }

    #[test]
    fn fetch_downloads_image_bytes() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/banner.png").with_status(200).with_body("PNGDATA").create();

        let bytes = client_for(&server).fetch(&format!("{}/banner.png", server.url())).unwrap();
        assert_eq!(bytes, b"PNGDATA".to_vec());
    }

    #[test]
    fn fetch_reports_http_failure() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/banner.png").with_status(404).create();

        let result = client_for(&server).fetch(&format!("{}/banner.png", server.url()));
        match result {
            Err(AppError::Download(message)) => assert!(message.contains("404")),
            other => panic!("expected Download, got {other:?}"),
        }
    }
}
