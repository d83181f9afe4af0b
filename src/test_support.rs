//! In-process stand-in for the remote API, used by client and server tests.
//!
//! Each `spawn_upstream` call runs its own axum server on a background thread
//! bound to an ephemeral port; dropping the handle shuts it down.

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::oneshot;

pub(crate) const USER_ID: &str = "5d1e2f3a4b6c";
pub(crate) const USERNAME: &str = "rider@example.com";
pub(crate) const PASSWORD: &str = "correct horse";
/// Accepted by the login endpoint, but no cookie is issued
pub(crate) const NO_COOKIE_USER: &str = "cookieless@example.com";

const SESSION_COOKIE: &str = "peloton_session_id=0123abcd";

pub(crate) const SAMPLE_CSV: &str = "Workout Timestamp,Live/On-Demand,Instructor Name,Length (minutes),Fitness Discipline,Type,Title,Class Timestamp,Total Output,Avg. Watts,Avg. Resistance,Avg. Cadence (RPM),Avg. Speed (mph),Distance (mi),Calories Burned,Avg. Heartrate,Avg. Incline,Avg. Pace (min/mi)
2020-01-01,true,Jane Doe,1800,Cycling,Class,Title,2020-01-01,150,200,50%,90,20mph,5mi,300,140,,
,,,,,,,,,,,,,,,,,
";

const SAMPLE_PROFILE: &str = r#"{"id":"5d1e2f3a4b6c","username":"rider","email":"rider@example.com","total_workouts":1,"instructor_id":null}"#;

/// Canned responses served by the mock upstream
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fixture {
    pub(crate) csv: &'static str,
    pub(crate) profile: &'static str,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            csv: SAMPLE_CSV,
            profile: SAMPLE_PROFILE,
        }
    }
}

pub(crate) struct MockUpstream {
    pub(crate) base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub(crate) fn spawn_upstream(fixture: Fixture) -> MockUpstream {
    let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock upstream runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock upstream");
            addr_tx
                .send(listener.local_addr().expect("mock upstream address"))
                .expect("report mock upstream address");
            axum::serve(listener, router(fixture))
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("mock upstream server");
        });
    });

    let addr = addr_rx.recv().expect("mock upstream did not start");
    MockUpstream {
        base_url: format!("http://{addr}"),
        shutdown: Some(shutdown_tx),
    }
}

/// A URL nothing is listening on
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

fn router(fixture: Fixture) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/api/me", get(me))
        .route("/api/user/{id}/workout_history_csv", get(workout_history_csv))
        .route("/api/user/{id}/workouts", get(workouts))
        .with_state(fixture)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.split(';').any(|pair| pair.trim() == SESSION_COOKIE))
}

fn api_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "error_code": 3010,
            "message": message,
            "details": "",
        })),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["with_pubsub"] != json!(false) {
        return api_error(StatusCode::BAD_REQUEST, "with_pubsub is required");
    }
    let user = body["username_or_email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (user, password) {
        (USERNAME, PASSWORD) => (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({ "user_id": USER_ID })),
        )
            .into_response(),
        (NO_COOKIE_USER, PASSWORD) => Json(json!({ "user_id": USER_ID })).into_response(),
        _ => api_error(StatusCode::UNAUTHORIZED, "Login failed"),
    }
}

async fn me(State(fixture): State<Fixture>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "Login required");
    }
    ([(header::CONTENT_TYPE, "application/json")], fixture.profile).into_response()
}

async fn workout_history_csv(
    State(fixture): State<Fixture>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "Login required");
    }
    if id != USER_ID {
        return api_error(StatusCode::NOT_FOUND, "User not found");
    }
    ([(header::CONTENT_TYPE, "text/csv")], fixture.csv).into_response()
}

async fn workouts(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "Login required");
    }
    if id != USER_ID {
        return api_error(StatusCode::NOT_FOUND, "User not found");
    }
    let number = |key: &str| {
        params
            .get(key)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_default()
    };
    Json(json!({
        "data": [{
            "id": "8a7b6c5d",
            "status": "COMPLETE",
            "fitness_discipline": "cycling",
            "created_at": 1577880000,
            "total_work": 150000.0,
            "title": null,
        }],
        "page": number("page"),
        "limit": number("limit"),
        "total": 1,
        "count": 1,
        "page_count": 1,
        "show_previous": false,
        "show_next": false,
        "sort_by": params.get("sort_by").cloned().unwrap_or_default(),
    }))
    .into_response()
}
