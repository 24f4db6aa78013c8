//! Client for the program CRUD API.
//!
//! Every call is a single request/response round trip; failures are returned
//! to the caller without retrying.

use crate::constants::{API_PROGRAM_PATH, API_SAVE_PATH, API_SEARCH_PATH};
use crate::errors::{AppError, AppResult};
use crate::models::Program;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

/// Optional filters for [`ProgramApi::search_programs`]. Blank values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub organismo: Option<String>,
    pub estado: Option<String>,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    programas: Option<Vec<Program>>,
    #[serde(default)]
    programa: Option<Program>,
    #[serde(default)]
    programa_id: Option<serde_json::Value>,
}

impl ApiEnvelope {
    fn parse(body: &str) -> AppResult<Self> {
        let envelope: Self = serde_json::from_str(body)?;
        if envelope.success {
            Ok(envelope)
        } else {
            let reason = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "Unknown API error".to_string());
            Err(AppError::ApiError(reason))
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgramApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ProgramApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Relative joins only append to a path ending in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn search_url(&self, filters: &SearchFilters) -> AppResult<Url> {
        let mut url = self.base_url.join(API_SEARCH_PATH)?;
        let params = [
            ("search", &filters.search),
            ("organismo", &filters.organismo),
            ("estado", &filters.estado),
        ];
        for (key, value) in params {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                url.query_pairs_mut().append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn program_url(&self, id: &str) -> AppResult<Url> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::InvalidInput("Program id must not be empty".to_string()));
        }
        let mut url = self.base_url.join(API_PROGRAM_PATH)?;
        url.path_segments_mut()
            .map_err(|_| AppError::UrlError(format!("Cannot append to {}", self.base_url)))?
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> AppResult<ApiEnvelope> {
        let response = request.send().await?;
        let status = response.status();
        // Error responses carry the same envelope, so the body is read either way
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "API response received");
        ApiEnvelope::parse(&body)
    }

    /// Lists the programs matching `filters`.
    pub async fn search_programs(&self, filters: &SearchFilters) -> AppResult<Vec<Program>> {
        let url = self.search_url(filters)?;
        let envelope = self.send(self.client.get(url)).await?;
        let programs = envelope.programas.unwrap_or_default();
        info!(found = programs.len(), "Program search completed");
        Ok(programs)
    }

    /// Fetches a single program by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the API reports failure (e.g. unknown id) and
    /// `ParseError` when a successful response carries no program.
    pub async fn fetch_program(&self, id: &str) -> AppResult<Program> {
        let url = self.program_url(id)?;
        let envelope = self.send(self.client.get(url)).await?;
        envelope
            .programa
            .ok_or_else(|| AppError::ParseError("Response has no program".to_string()))
    }

    /// Creates the program, or updates it when it already has an id.
    ///
    /// Required fields are checked before any request is made.
    ///
    /// # Returns
    ///
    /// The id of the stored program.
    pub async fn save_program(&self, program: &Program) -> AppResult<String> {
        program.validate_required()?;
        let body = serde_json::to_string(program)?;

        match program.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => {
                let request = self
                    .client
                    .put(self.program_url(id)?)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body);
                self.send(request).await?;
                info!(id = id, "Program updated");
                Ok(id.to_string())
            }
            None => {
                let request = self
                    .client
                    .post(self.base_url.join(API_SAVE_PATH)?)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body);
                let envelope = self.send(request).await?;
                let id = match envelope.programa_id {
                    Some(serde_json::Value::String(id)) => id,
                    Some(other) => other.to_string(),
                    None => {
                        return Err(AppError::ParseError(
                            "Response has no program id".to_string(),
                        ))
                    }
                };
                info!(id = %id, "Program created");
                Ok(id)
            }
        }
    }

    pub async fn delete_program(&self, id: &str) -> AppResult<()> {
        let url = self.program_url(id)?;
        self.send(self.client.delete(url)).await?;
        info!(id = id, "Program deleted");
        Ok(())
    }
}
