//! Session client for the remote API
//!
//! A `Session` owns one HTTP agent and its cookie jar. Logging in stores the
//! session cookie in the jar; every later request on the same `Session`
//! replays it. Sessions are never shared between invocations.

use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::credentials::Credentials;
use crate::error::ApiError;

use super::types::{ErrorResponse, LoginRequest, UserProfile, WorkoutPage};

/// Connection settings shared by every session
#[derive(Debug, Clone)]
pub(crate) struct ClientSettings {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

pub(crate) struct Session {
    agent: Agent,
    base_url: String,
}

impl Session {
    pub(crate) fn new(settings: &ClientSettings) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in and keep the returned session cookie for later requests.
    pub(crate) fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.url("/auth/login");
        debug!(%url, "logging in");

        let response = self
            .agent
            .post(&url)
            .send_json(LoginRequest {
                username_or_email: credentials.username(),
                password: credentials.password(),
                with_pubsub: false,
            })
            .map_err(ApiError::AuthTransport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Auth {
                status: status.as_u16(),
                message: error_message(response),
            });
        }

        if !self.has_session_cookie() {
            return Err(ApiError::Auth {
                status: status.as_u16(),
                message: "no session cookie in login response".to_string(),
            });
        }

        info!("logged in");
        Ok(())
    }

    fn has_session_cookie(&self) -> bool {
        self.agent.cookie_jar_lock().iter().next().is_some()
    }

    pub(crate) fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json(&self.url("/api/me"))
    }

    /// Raw CSV export for `user_id`, returned byte for byte.
    pub(crate) fn fetch_workouts_csv(&self, user_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(&format!("/api/user/{user_id}/workout_history_csv"));
        let response = self.get(&url)?;

        let mut bytes = Vec::new();
        response
            .into_body()
            .as_reader()
            .read_to_end(&mut bytes)
            .map_err(|source| ApiError::Read {
                url: url.clone(),
                source,
            })?;

        debug!(%url, bytes = bytes.len(), "fetched workout history");
        Ok(bytes)
    }

    /// One page of the workout listing, newest first
    pub(crate) fn fetch_workouts(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<WorkoutPage, ApiError> {
        let url = self.url(&format!(
            "/api/user/{user_id}/workouts?sort_by=-created&page={page}&limit={limit}"
        ));
        self.get_json(&url)
    }

    fn get(&self, url: &str) -> Result<Response<Body>, ApiError> {
        debug!(%url, "GET");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: error_message(response),
            });
        }
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let mut body = self.get(url)?.into_body();
        serde_json::from_reader(body.as_reader()).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn error_message(response: Response<Body>) -> String {
    let mut body = response.into_body();
    match body.read_to_string() {
        Ok(text) => ErrorResponse::message_from(&text),
        Err(err) => format!("unreadable error body: {err}"),
    }
}
