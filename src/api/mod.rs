//! Remote API access
//!
//! `client` holds the cookie-backed `Session`; `types` holds the request and
//! response bodies it exchanges.

mod client;
mod types;

pub(crate) use client::{ClientSettings, Session};
pub(crate) use types::{UserProfile, WorkoutPage};
