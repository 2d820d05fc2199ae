//! HTTP client for the remote form backend

use cm_core::config::BackendConfig;
use cm_core::error::{ModError, Result};
use cm_core::queue::SubmissionQueue;
use cm_core::submission::{Submission, WireSubmission};
use reqwest::blocking::{Client, Response};
use tracing::debug;

/// Error body the backend returns on failed requests
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}

/// Client for a Netlify-style forms API.
///
/// Pending form submissions are listed per site and deleted individually,
/// both authenticated with a bearer token.
pub struct FormsClient {
    api_base_url: String,
    site_id: String,
    token: String,
    client: Client,
}

impl FormsClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            site_id: config.site_id.clone(),
            token: config.token.clone(),
            client: Client::new(),
        }
    }

    fn submissions_url(&self) -> String {
        format!("{}/sites/{}/submissions", self.api_base_url, self.site_id)
    }

    fn delete_url(&self, id: &str) -> String {
        format!("{}/submissions/{}", self.api_base_url, id)
    }

    /// Status line plus the backend's error message, when it sends one
    fn error_message(response: Response) -> String {
        let status = response.status();
        match response.json::<ApiError>() {
            Ok(err) => format!("{status}: {}", err.message),
            Err(_) => status.to_string(),
        }
    }
}

impl SubmissionQueue for FormsClient {
    fn list_pending(&self) -> Result<Vec<Submission>> {
        let url = self.submissions_url();
        debug!("Fetching pending submissions from {url}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| ModError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ModError::Fetch(Self::error_message(response)));
        }

        let wire: Vec<WireSubmission> = response
            .json()
            .map_err(|e| ModError::Fetch(format!("malformed submission list: {e}")))?;
        debug!("Backend returned {} pending submissions", wire.len());
        // Backend order is preserved; the UI never re-sorts
        Ok(wire.into_iter().map(Submission::from).collect())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let url = self.delete_url(id);
        debug!("Deleting submission {id} via {url}");

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| ModError::Delete {
                id: id.to_string(),
                message: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(ModError::Delete {
                id: id.to_string(),
                message: Self::error_message(response),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> FormsClient {
        FormsClient::new(&BackendConfig {
            site_id: "my-blog".to_string(),
            token: "secret".to_string(),
            api_base_url: "https://api.netlify.com/api/v1/".to_string(),
        })
    }

    #[test]
    fn test_submissions_url() {
        assert_eq!(
            client().submissions_url(),
            "https://api.netlify.com/api/v1/sites/my-blog/submissions"
        );
    }

    #[test]
    fn test_delete_url() {
        assert_eq!(
            client().delete_url("42"),
            "https://api.netlify.com/api/v1/submissions/42"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        // The config value above ends with a slash; URLs must not double it
        assert!(!client().submissions_url().contains("v1//"));
    }
}
