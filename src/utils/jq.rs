use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::JqError;

/// Pipe JSON through jq with the given filter expression.
///
/// Input is written from a separate thread so large exports cannot fill the
/// stdout pipe while jq waits on stdin.
pub(crate) fn filter_json(json: &str, filter: &str) -> Result<String, JqError> {
    let mut child = Command::new("jq")
        .arg(filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JqError::NotFound
            } else {
                JqError::Spawn(e)
            }
        })?;

    let writer = child.stdin.take().map(|mut stdin| {
        let input = json.to_owned();
        thread::spawn(move || stdin.write_all(input.as_bytes()))
    });

    let output = child.wait_with_output().map_err(JqError::Wait)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JqError::Filter(stderr.trim().to_string()));
    }

    if let Some(Ok(Err(e))) = writer.map(thread::JoinHandle::join) {
        return Err(JqError::Stdin(e));
    }

    String::from_utf8(output.stdout).map_err(JqError::Utf8)
}
