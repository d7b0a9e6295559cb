//! External command invocation with a uniform signal-handling contract.
//!
//! Three termination scenarios share one contract:
//!
//! 1. The whole process group receives SIGTERM/SIGINT/SIGHUP: the child
//!    terminates on its own; this process must finish its own shutdown
//!    after the child, printing nothing on the child's behalf.
//! 2. Only this process receives the signal: it terminates the child, waits
//!    for it, finalizes, and exits by signal.
//! 3. Only the child receives the signal: this process detects the failure
//!    and aborts the run.
//!
//! The only accommodation here is the grace sleep after a signal-terminated
//! child (effective status above 128): it gives a racing shutdown signal to
//! this process a chance to be handled before we raise an error for the
//! child's death, so scenario 1 does not produce a confusing double error.

use std::ffi::OsStr;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::thread::sleep;
use std::time::Duration;

use crate::error::{io_err, SyncError};

const SIGNAL_GRACE: Duration = Duration::from_secs(1);

/// POSIX convention: a shell reports signal death as 128 + signum.
fn effective_status(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}

fn grace_sleep_if_signaled(status: i32) {
    if status > 128 {
        sleep(SIGNAL_GRACE);
    }
}

/// Run a command in argument-vector form (no shell), output streams
/// inherited. Fails with [`SyncError::CommandFailed`] on any non-zero
/// status.
pub fn run_command<I, S>(program: &Path, args: I) -> Result<(), SyncError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
    let status = Command::new(program)
        .args(&args)
        .status()
        .map_err(|e| io_err(program, e))?;

    let status = effective_status(status);
    grace_sleep_if_signaled(status);
    if status != 0 {
        return Err(SyncError::CommandFailed {
            command: command_line(program, &args),
            status,
        });
    }
    Ok(())
}

/// Run a command through `/bin/sh -c`, capturing combined stdout+stderr
/// with trailing whitespace trimmed. Fails on any non-zero status.
pub fn shell_call(cmd: &str) -> Result<String, SyncError> {
    let (status, output) = shell_call_with_status(cmd)?;
    if status != 0 {
        return Err(SyncError::CommandFailed {
            command: cmd.to_string(),
            status,
        });
    }
    Ok(output)
}

/// Like [`shell_call`], but returns the status to the caller for
/// inspection instead of raising.
pub fn shell_call_with_status(cmd: &str) -> Result<(i32, String), SyncError> {
    // Redirect stderr into the stdout pipe before the command runs, so the
    // combined stream interleaves in delivery order.
    let result = Command::new("/bin/sh")
        .arg("-c")
        .arg(format!("exec 2>&1; {cmd}"))
        .output()
        .map_err(|e| io_err("/bin/sh", e))?;

    let status = effective_status(result.status);
    grace_sleep_if_signaled(status);

    let output = String::from_utf8_lossy(&result.stdout);
    Ok((status, output.trim_end().to_string()))
}

fn command_line(program: &Path, args: &[std::ffi::OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn run_command_succeeds_on_zero_status() {
        run_command(Path::new("/bin/true"), std::iter::empty::<&str>()).expect("true");
    }

    #[test]
    fn run_command_fails_on_nonzero_status() {
        let err = run_command(Path::new("/bin/false"), std::iter::empty::<&str>())
            .expect_err("false must fail");
        match err {
            SyncError::CommandFailed { status, .. } => assert_eq!(status, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shell_call_captures_stdout() {
        let out = shell_call("echo hello").expect("echo");
        assert_eq!(out, "hello");
    }

    #[test]
    fn shell_call_merges_stderr_in_delivery_order() {
        let out = shell_call("echo oops 1>&2; echo done").expect("shell");
        assert_eq!(out, "oops\ndone");
    }

    #[test]
    fn shell_call_with_status_returns_code_without_raising() {
        let (status, out) = shell_call_with_status("echo partial; exit 3").expect("shell");
        assert_eq!(status, 3);
        assert_eq!(out, "partial");
    }

    #[test]
    fn signal_terminated_child_sleeps_before_raising() {
        let start = Instant::now();
        let err = shell_call("kill -TERM $$").expect_err("signal death must fail");
        assert!(start.elapsed() >= Duration::from_secs(1), "missing grace sleep");
        match err {
            SyncError::CommandFailed { status, .. } => assert_eq!(status, 128 + 15),
            other => panic!("unexpected error: {other}"),
        }
    }
}
