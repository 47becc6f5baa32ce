use super::{ApiResponse, SampleService};
use crate::config::ReconcileConfig;
use crate::error::{FixError, Result};
use crate::model::{FileRecord, FileUpdate, Sample};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct FilesEnvelope {
    data: Vec<FileRecord>,
}

pub struct HttpService {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpService {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::build(base_url, token, Client::builder())
    }

    pub fn from_config(config: &ReconcileConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self::build(&config.api_url, &config.token, builder)
    }

    fn build(base_url: &str, token: &str, builder: reqwest::blocking::ClientBuilder) -> Result<Self> {
        let client = builder
            .build()
            .map_err(|e| FixError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Send one authorized request and hand back status and body untouched.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "request");

        let mut req = self.client.request(method, &url).bearer_auth(&self.token);
        if let Some(body) = body {
            req = req.json(body);
        }
        let res = req.send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        debug!(status, %url, "response");

        Ok(ApiResponse { status, body })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let res = self.request(Method::GET, path, None)?;
        if !res.is_success() {
            return Err(FixError::Api(format!(
                "GET {} returned {}: {}",
                path, res.status, res.body
            )));
        }
        Ok(serde_json::from_str(&res.body)?)
    }
}

impl SampleService for HttpService {
    fn list_samples(&self, project_id: u64) -> Result<Vec<Sample>> {
        self.get_json(&format!("/projects/{}/samples", project_id))
    }

    fn list_files(&self, project_id: u64, sample_id: u64) -> Result<Vec<FileRecord>> {
        let envelope: FilesEnvelope = self.get_json(&format!(
            "/projects/{}/samples/{}/files",
            project_id, sample_id
        ))?;
        Ok(envelope.data)
    }

    fn update_file(
        &mut self,
        project_id: u64,
        sample_id: u64,
        file_id: u64,
        update: &FileUpdate,
    ) -> Result<ApiResponse> {
        let path = format!(
            "/projects/{}/samples/{}/files/{}",
            project_id, sample_id, file_id
        );
        let body = serde_json::to_value(update)?;
        let res = self.request(Method::PUT, &path, Some(&body))?;
        if !res.is_success() {
            return Err(FixError::Api(format!(
                "PUT {} returned {}: {}",
                path, res.status, res.body
            )));
        }
        Ok(res)
    }
}
