use thiserror::Error;

/// Failures talking to the remote API. All of them are fatal to the
/// current invocation; nothing is retried.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Login failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Login request failed: {0}")]
    AuthTransport(#[source] ureq::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Reading response from {url} failed: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{url} returned {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile response has no user id")]
    MissingUserId,
}

impl ApiError {
    pub(crate) fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. } | ApiError::AuthTransport(_))
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Missing environment variable {var}")]
    MissingCredential { var: &'static str },

    #[error("Invalid bind address \"{input}\"")]
    InvalidBind { input: String },

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Jq(#[from] JqError),

    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}
