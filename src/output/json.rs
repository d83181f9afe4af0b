use serde::Serialize;

/// Pretty JSON with two-space indentation. An empty record list renders as
/// `[]`, never `null`.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
