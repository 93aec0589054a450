// SPDX-License-Identifier: MPL-2.0
//! Thin asynchronous client for the analysis backend.

use crate::api::types::{AnalysisOutcome, AnalyzeResponse, StatusResponse};
use crate::error::{Error, Result};

/// Backend address used when neither the config file nor the command
/// line provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Shared HTTP client bound to one backend base URL. Cloning is cheap;
/// the underlying connection pool is reference-counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with an explicit redirect policy and user agent.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent("CareerLens/0.1.0")
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Uploads the job URL and resume bytes as one multipart request
    /// and unpacks the response envelope.
    ///
    /// A reply with the success flag unset becomes [`Error::Backend`]
    /// carrying the server's message verbatim (empty when the server
    /// sent none); transport failures and unparseable bodies become
    /// [`Error::Http`].
    pub async fn analyze(
        &self,
        job_url: String,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<AnalysisOutcome> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new()
            .text("job_url", job_url)
            .part("cv", part);

        let response = self
            .http
            .post(self.endpoint("/api/analyze"))
            .multipart(form)
            .send()
            .await?;

        // Error replies arrive with a 4xx/5xx status but still carry a
        // JSON body, so the body is parsed before the status matters.
        let body: AnalyzeResponse = response.json().await?;
        if body.success {
            Ok(AnalysisOutcome {
                analysis: body.analysis,
                profession: body.profession,
                skills: body.skills,
                cv_preview: body.cv_preview,
            })
        } else {
            Err(Error::Backend(body.error.unwrap_or_default()))
        }
    }

    /// Probes the backend health endpoint.
    pub async fn status(&self) -> Result<StatusResponse> {
        let response = self.http.get(self.endpoint("/api/status")).send().await?;
        Ok(response.json().await?)
    }

    /// Prepares the chat stream request for a question. The question
    /// travels URL-encoded as a query parameter; sending and reading
    /// the stream is the caller's job.
    pub fn chat_request(&self, question: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.endpoint("/api/chat"))
            .query(&[("question", question)])
    }
}

impl Default for ApiClient {
    /// Fallback client against the default backend. Used when building
    /// the configured client fails; `reqwest::Client::new` cannot fail.
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
