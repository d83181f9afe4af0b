/// Default API origin
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.onepeloton.com";

/// Default per-request timeout, in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default listen address for `pelofeed serve`
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Environment variables holding the account credentials
pub(crate) const USERNAME_VAR: &str = "USERNAME";
pub(crate) const PASSWORD_VAR: &str = "PASSWORD";
