//! Bounded subprocess execution.
//!
//! Every external tool invocation goes through [`run_with_timeout`], which
//! returns an explicit [`ProcessError`] instead of panicking or blocking
//! forever. Stdout and stderr are drained on helper threads so a tool that
//! writes more than a pipe buffer never deadlocks against the wait loop.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Errors from launching or waiting on a subprocess.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be started (missing, not executable, ...).
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The process exceeded its time budget and was killed.
    #[error("`{program}` timed out after {} seconds", .timeout.as_secs())]
    TimedOut {
        /// Program that timed out.
        program: String,
        /// The budget that was exceeded.
        timeout: Duration,
        /// Wall-clock time until the process was killed.
        elapsed: Duration,
    },

    /// Waiting on the child failed.
    #[error("failed to wait for `{program}`: {source}")]
    Wait {
        /// Program being waited on.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Returns true if the executable could not be found on `PATH`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Captured output of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
    /// Wall-clock time from spawn until all output was collected.
    pub elapsed: Duration,
}

impl ProcessOutput {
    /// True if the process exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs `command` to completion, killing it once `timeout` elapses.
///
/// Stdin is closed; stdout and stderr are captured. The budget covers both
/// the process itself and reading its output to EOF.
///
/// # Errors
///
/// Returns [`ProcessError::Spawn`] if the process cannot be started,
/// [`ProcessError::TimedOut`] if it or its output pipes outlive `timeout`, and
/// [`ProcessError::Wait`] if polling the child fails.
pub fn run_with_timeout(
    mut command: Command,
    timeout: Duration,
) -> Result<ProcessOutput, ProcessError> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!("Spawning {:?} (timeout {:?})", command, timeout);

    let start = Instant::now();
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.clone(),
            source,
        })?;

    let (tx, rx) = mpsc::channel();
    drain(Stream::Stdout, child.stdout.take(), tx.clone());
    drain(Stream::Stderr, child.stderr.take(), tx);

    let code = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status.code(),
            Ok(None) => {
                let elapsed = start.elapsed();
                if elapsed >= timeout {
                    kill(&mut child);
                    // Reader threads are left detached: a grandchild may
                    // still hold the pipes open.
                    return Err(ProcessError::TimedOut {
                        program,
                        timeout,
                        elapsed,
                    });
                }
                thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
            }
            Err(source) => {
                kill(&mut child);
                return Err(ProcessError::Wait { program, source });
            }
        }
    };

    // The child has exited, but a background grandchild can keep the pipes
    // open. Collecting output shares the same budget.
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    loop {
        let remaining = timeout.saturating_sub(start.elapsed());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, bytes)) => stdout = bytes,
            Ok((Stream::Stderr, bytes)) => stderr = bytes,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                let elapsed = start.elapsed();
                debug!("`{}` exited but its output pipes are still open", program);
                return Err(ProcessError::TimedOut {
                    program,
                    timeout,
                    elapsed,
                });
            }
        }
    }

    Ok(ProcessOutput {
        code,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        elapsed: start.elapsed(),
    })
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Reads `pipe` to EOF on a helper thread and sends the bytes to `tx`.
fn drain<R: Read + Send + 'static>(
    stream: Stream,
    pipe: Option<R>,
    tx: Sender<(Stream, Vec<u8>)>,
) {
    if let Some(mut pipe) = pipe {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            let _ = tx.send((stream, buf));
        });
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn captures_both_streams() {
        let out = run_with_timeout(sh("echo out; echo err >&2; exit 3"), Duration::from_secs(5))
            .unwrap();
        assert_eq!(out.code, Some(3));
        assert!(!out.success());
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
    }

    #[test]
    fn large_output_does_not_deadlock() {
        let out = run_with_timeout(
            sh("i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"),
            Duration::from_secs(30),
        )
        .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.lines().count(), 20000);
    }

    #[test]
    fn timeout_kills_child() {
        let err = run_with_timeout(sh("sleep 5"), Duration::from_millis(200)).unwrap_err();
        match err {
            ProcessError::TimedOut { elapsed, .. } => {
                assert!(elapsed >= Duration::from_millis(200));
                assert!(elapsed < Duration::from_secs(5));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn background_grandchild_holding_stdout_times_out() {
        let start = Instant::now();
        let err = run_with_timeout(sh("sleep 8 & echo started"), Duration::from_secs(1))
            .unwrap_err();

        assert!(start.elapsed() < Duration::from_secs(5));
        match err {
            ProcessError::TimedOut { elapsed, timeout, .. } => {
                assert_eq!(timeout, Duration::from_secs(1));
                assert!(elapsed >= Duration::from_secs(1));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn background_grandchild_without_pipes_is_fine() {
        let out = run_with_timeout(
            sh("sleep 8 >/dev/null 2>&1 & echo started"),
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "started\n");
        assert!(out.elapsed < Duration::from_secs(5));
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = run_with_timeout(
            Command::new("pycc-definitely-not-installed"),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
