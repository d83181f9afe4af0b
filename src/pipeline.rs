//! Fresh-session flows
//!
//! Every call logs in with a new `Session`, so no state survives between
//! invocations or HTTP requests.

use std::time::Instant;

use tracing::{debug, info};

use crate::api::{ClientSettings, Session, UserProfile, WorkoutPage};
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::workouts::{WorkoutRecord, normalize};

fn logged_in(
    settings: &ClientSettings,
    credentials: &Credentials,
) -> Result<(Session, UserProfile), ApiError> {
    let session = Session::new(settings);
    session.login(credentials)?;
    let profile = session.fetch_profile()?;
    if profile.id.is_empty() {
        return Err(ApiError::MissingUserId);
    }
    debug!(user_id = %profile.id, "fetched profile");
    Ok((session, profile))
}

/// Raw workout history CSV for the account
pub(crate) fn fetch_csv(
    settings: &ClientSettings,
    credentials: &Credentials,
) -> Result<Vec<u8>, ApiError> {
    let start = Instant::now();
    let (session, profile) = logged_in(settings, credentials)?;
    let csv = session.fetch_workouts_csv(&profile.id)?;
    info!(
        bytes = csv.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "downloaded workout history"
    );
    Ok(csv)
}

pub(crate) fn fetch_records(
    settings: &ClientSettings,
    credentials: &Credentials,
) -> Result<Vec<WorkoutRecord>, ApiError> {
    let csv = fetch_csv(settings, credentials)?;
    Ok(normalize(&csv))
}

pub(crate) fn fetch_profile(
    settings: &ClientSettings,
    credentials: &Credentials,
) -> Result<UserProfile, ApiError> {
    logged_in(settings, credentials).map(|(_, profile)| profile)
}

pub(crate) fn fetch_history(
    settings: &ClientSettings,
    credentials: &Credentials,
    page: u32,
    limit: u32,
) -> Result<WorkoutPage, ApiError> {
    let (session, profile) = logged_in(settings, credentials)?;
    session.fetch_workouts(&profile.id, page, limit)
}
