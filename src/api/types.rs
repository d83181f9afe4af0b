//! Wire types for the remote API
//!
//! Every response field is optional upstream and may be `null`, so response
//! structs default each field instead of failing to decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) username_or_email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) with_pubsub: bool,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorResponse {
    #[serde(deserialize_with = "nullable")]
    pub(crate) status: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) error_code: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) message: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) details: String,
}

impl ErrorResponse {
    /// Best-effort message from an error body, falling back to the raw text
    pub(crate) fn message_from(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(err) if !err.message.is_empty() => {
                if err.details.is_empty() {
                    err.message
                } else {
                    format!("{} ({})", err.message, err.details)
                }
            }
            Ok(err) if err.error_code != 0 => {
                format!("error code {} (status {})", err.error_code, err.status)
            }
            _ => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "empty response body".to_string()
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ContractAgreement {
    #[serde(deserialize_with = "nullable")]
    pub(crate) contract_type: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) contract_id: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) contract_created_at: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) bike_contract_url: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) tread_contract_url: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) agreed_at: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) contract_display_name: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PairedDevice {
    #[serde(deserialize_with = "nullable")]
    pub(crate) name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) paired_device_type: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) serial_number: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct MusicAuth {
    #[serde(deserialize_with = "nullable")]
    pub(crate) provider: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) status: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) email: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct QuickHits {
    #[serde(deserialize_with = "nullable")]
    pub(crate) quick_hits_enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) speed_shortcuts: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) incline_shortcuts: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WorkoutCount {
    #[serde(deserialize_with = "nullable")]
    pub(crate) name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) slug: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) count: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) icon_url: String,
}

/// The `/api/me` profile. Only `id` is needed downstream; the rest is kept
/// so `pelofeed profile` can show it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UserProfile {
    // identity
    #[serde(deserialize_with = "nullable")]
    pub(crate) id: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) username: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) email: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) obfuscated_email: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) middle_initial: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) gender: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) birthday: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) location: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) phone_number: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) created_country: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) created_at: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) instructor_id: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) facebook_id: String,
    #[serde(skip_serializing, deserialize_with = "nullable")]
    pub(crate) facebook_access_token: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) referral_code: String,

    // fitness settings
    #[serde(deserialize_with = "nullable")]
    pub(crate) weight: f64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) height: f64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) cycling_ftp: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) cycling_workout_ftp: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) cycling_ftp_source: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) cycling_ftp_workout_id: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) estimated_cycling_ftp: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) default_max_heart_rate: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) customized_max_heart_rate: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) default_heart_rate_zones: Vec<f64>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) customized_heart_rate_zones: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) quick_hits: QuickHits,
    #[serde(deserialize_with = "nullable")]
    pub(crate) hardware_settings: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) block_explicit: bool,

    // devices and integrations
    #[serde(deserialize_with = "nullable")]
    pub(crate) paired_devices: Vec<PairedDevice>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) external_music_auth_list: Vec<MusicAuth>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_strava_authenticated: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_fitbit_authenticated: bool,

    // account state
    #[serde(deserialize_with = "nullable")]
    pub(crate) contract_agreements: Vec<ContractAgreement>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) member_groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) has_active_digital_subscription: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) has_active_device_subscription: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) has_signed_waiver: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) can_charge: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_demo: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_provisional: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_complete_profile: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_profile_private: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_internal_beta_tester: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_external_beta_tester: bool,

    // counts
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_workouts: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_pedaling_metric_workouts: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_non_pedaling_metric_workouts: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) workout_counts: Vec<WorkoutCount>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) last_workout_at: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_followers: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_following: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_pending_followers: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) referrals_made: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) v1_referrals_made: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) subscription_credits: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) subscription_credits_used: i64,
}

/// One entry of the paginated `/api/user/{id}/workouts` listing
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WorkoutSummary {
    #[serde(deserialize_with = "nullable")]
    pub(crate) id: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) name: String,
    pub(crate) title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) status: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) fitness_discipline: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) workout_type: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) device_type: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) platform: String,
    pub(crate) metrics_type: Option<String>,
    pub(crate) peloton_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) timezone: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) created_at: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) start_time: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) end_time: i64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_work: f64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) has_pedaling_metrics: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) has_leaderboard_metrics: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) is_total_work_personal_record: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total_video_watch_time_seconds: i64,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WorkoutPage {
    #[serde(deserialize_with = "nullable")]
    pub(crate) data: Vec<WorkoutSummary>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) page: u32,
    #[serde(deserialize_with = "nullable")]
    pub(crate) limit: u32,
    #[serde(deserialize_with = "nullable")]
    pub(crate) total: u64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) count: u64,
    #[serde(deserialize_with = "nullable")]
    pub(crate) page_count: u32,
    #[serde(deserialize_with = "nullable")]
    pub(crate) show_previous: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) show_next: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) sort_by: String,
}
