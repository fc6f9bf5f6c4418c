//! External process execution.
//! Short steps (`git init`, package install, the compiler) run with captured
//! output; servers run in the foreground and receive the signals sent to us.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Number of trailing stderr lines kept in a `ProcessError`.
const STDERR_TAIL_LINES: usize = 20;

/// Renders a command line for messages, e.g. `npx tsc`.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// Runs `program` to completion in `cwd` with stdout/stderr captured.
///
/// # Errors
/// * `Error::ProcessError` if the process cannot be spawned or exits with a
///   non-zero status; the reason carries the tail of its output
pub fn run_captured(program: &str, args: &[&str], cwd: &Path, envs: &[(&str, &str)]) -> Result<()> {
    let command = command_line(program, args);
    debug!("Running `{}` in '{}'", command, cwd.display());

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .envs(envs.iter().copied())
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::ProcessError { command: command.clone(), reason: e.to_string() })?;

    if output.status.success() {
        return Ok(());
    }

    // Compilers such as tsc report diagnostics on stdout.
    let mut details = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if details.is_empty() {
        details = String::from_utf8_lossy(&output.stdout).trim().to_string();
    }
    let tail = tail_lines(&details, STDERR_TAIL_LINES);
    let reason = if tail.is_empty() {
        describe_status(output.status)
    } else {
        format!("{}\n{tail}", describe_status(output.status))
    };
    Err(Error::ProcessError { command, reason })
}

/// Runs `command` with inherited stdio until it exits and returns its exit
/// code. Interrupt, terminate and hangup signals received meanwhile are
/// forwarded to the child.
pub fn run_foreground(command: &mut Command) -> Result<i32> {
    let program = command.get_program().to_string_lossy().into_owned();
    let args: Vec<String> =
        command.get_args().map(|arg| arg.to_string_lossy().into_owned()).collect();
    let line = std::iter::once(program).chain(args).collect::<Vec<_>>().join(" ");
    debug!("Starting `{}` in the foreground", line);

    let failed =
        |e: std::io::Error| Error::ProcessError { command: line.clone(), reason: e.to_string() };
    // Installed before spawning so signals sent during startup are forwarded.
    let forwarder = signals::Forwarder::install().map_err(failed)?;
    let mut child = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(failed)?;

    let status = forwarder.wait(&mut child).map_err(failed)?;
    Ok(exit_code(status))
}

/// Exit code of a finished child; `128 + signal` when it was killed.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => format!("terminated ({status})"),
    }
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(count)..].join("\n")
}

#[cfg(unix)]
mod signals {
    use std::io;
    use std::process::{Child, ExitStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use log::debug;
    use rustix::process::{kill_process, Pid, Signal};
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::{flag, low_level, SigId};

    const FORWARDED: [i32; 3] = [SIGINT, SIGTERM, SIGHUP];
    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Signal handlers installed while a foreground child runs. Dropping it
    /// unregisters them.
    pub struct Forwarder {
        pending: Arc<AtomicUsize>,
        ids: Vec<SigId>,
    }

    impl Forwarder {
        pub fn install() -> io::Result<Self> {
            let pending = Arc::new(AtomicUsize::new(0));
            let mut forwarder =
                Self { pending: Arc::clone(&pending), ids: Vec::with_capacity(FORWARDED.len()) };
            for signal in FORWARDED {
                let id = flag::register_usize(signal, Arc::clone(&pending), signal as usize)?;
                forwarder.ids.push(id);
            }
            Ok(forwarder)
        }

        /// Polls `child` until it exits, passing on every recorded signal.
        pub fn wait(&self, child: &mut Child) -> io::Result<ExitStatus> {
            loop {
                if let Some(status) = child.try_wait()? {
                    return Ok(status);
                }
                let signal = self.pending.swap(0, Ordering::SeqCst);
                if signal != 0 {
                    forward(child, signal as i32);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
        }
    }

    impl Drop for Forwarder {
        fn drop(&mut self) {
            for id in self.ids.drain(..) {
                low_level::unregister(id);
            }
        }
    }

    fn forward(child: &Child, signal: i32) {
        let Some(sig) = Signal::from_named_raw(signal) else {
            return;
        };
        debug!("Forwarding signal {} to child {}", signal, child.id());
        if let Err(e) = kill_process(Pid::from_child(child), sig) {
            debug!("Could not signal child {}: {}", child.id(), e);
        }
    }
}

#[cfg(not(unix))]
mod signals {
    use std::io;
    use std::process::{Child, ExitStatus};

    pub struct Forwarder;

    impl Forwarder {
        pub fn install() -> io::Result<Self> {
            Ok(Self)
        }

        pub fn wait(&self, child: &mut Child) -> io::Result<ExitStatus> {
            child.wait()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        assert_eq!(command_line("npx", &["tsc"]), "npx tsc");
        assert_eq!(command_line("git", &[]), "git");
    }

    #[test]
    fn tail_keeps_last_lines() {
        assert_eq!(tail_lines("a\nb\nc", 2), "b\nc");
        assert_eq!(tail_lines("a", 5), "a");
        assert_eq!(tail_lines("", 5), "");
    }

    #[test]
    fn missing_program_is_a_process_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run_captured("wecon-definitely-missing-program", &[], dir.path(), &[]);
        assert!(matches!(result, Err(Error::ProcessError { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_reports_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run_captured("sh", &["-c", "echo broken >&2; exit 3"], dir.path(), &[]);
        match result {
            Err(Error::ProcessError { command, reason }) => {
                assert!(command.starts_with("sh -c"));
                assert!(reason.contains("status 3"));
                assert!(reason.contains("broken"));
            }
            other => panic!("expected ProcessError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn foreground_forwards_terminate_to_child() {
        let mut command = Command::new("sh");
        command.args(["-c", "kill -TERM $PPID; sleep 5"]);
        let started = std::time::Instant::now();
        assert_eq!(run_foreground(&mut command).unwrap(), 128 + 15);
        assert!(started.elapsed() < std::time::Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn foreground_returns_child_exit_code() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 7"]);
        assert_eq!(run_foreground(&mut command).unwrap(), 7);
    }
}
