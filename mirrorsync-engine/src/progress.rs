//! Progress reporting — newline-delimited JSON over the supervisor socket.
//!
//! One-way, fire-and-forget: the supervisor never responds, and nothing is
//! read back. One message per progress change:
//!
//! ```text
//! {"message":"progress","data":{"progress":42}}
//! ```
//!
//! The connection is opened once per initializer run and closed (via
//! `Drop`) on every exit path. A socket that is absent or refuses the
//! connection is fatal to the whole run — the supervisor owns the socket
//! and is expected to be listening.

use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{socket_err, SyncError};

#[derive(Debug, Serialize)]
struct ProgressMessage {
    message: &'static str,
    data: ProgressData,
}

#[derive(Debug, Serialize)]
struct ProgressData {
    progress: u8,
}

/// Client end of the progress channel.
///
/// Generic over the writer so workflow tests can capture messages without
/// a real socket; production use is [`ProgressReporter::connect`].
#[derive(Debug)]
pub struct ProgressReporter<W: Write> {
    stream: W,
    path: PathBuf,
}

impl ProgressReporter<UnixStream> {
    /// Connect to the supervisor socket.
    pub fn connect(path: &Path) -> Result<Self, SyncError> {
        let stream = UnixStream::connect(path).map_err(|e| socket_err(path, e))?;
        Ok(Self {
            stream,
            path: path.to_path_buf(),
        })
    }
}

impl<W: Write> ProgressReporter<W> {
    pub fn from_writer(stream: W) -> Self {
        Self {
            stream,
            path: PathBuf::from("<in-memory>"),
        }
    }

    /// Send one progress event, a percentage in `[0, 100]`.
    ///
    /// Payload and newline are written separately, then flushed; no
    /// acknowledgment is awaited.
    pub fn send(&mut self, progress: u8) -> Result<(), SyncError> {
        let payload = serde_json::to_string(&ProgressMessage {
            message: "progress",
            data: ProgressData { progress },
        })?;
        self.write(payload.as_bytes())?;
        self.write(b"\n")?;
        self.stream.flush().map_err(|e| socket_err(&self.path, e))?;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SyncError> {
        self.stream
            .write_all(bytes)
            .map_err(|e| socket_err(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sends_newline_delimited_json() {
        let mut reporter = ProgressReporter::from_writer(Vec::new());
        reporter.send(10).expect("send");
        reporter.send(100).expect("send");

        let written = String::from_utf8(reporter.stream).expect("utf8");
        assert_eq!(
            written,
            "{\"message\":\"progress\",\"data\":{\"progress\":10}}\n\
             {\"message\":\"progress\",\"data\":{\"progress\":100}}\n"
        );
    }

    #[test]
    fn connect_to_missing_socket_is_fatal() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let err = ProgressReporter::connect(&dir.path().join("no.socket"))
            .expect_err("missing socket must fail");
        assert!(matches!(err, SyncError::Socket { .. }));
    }
}
