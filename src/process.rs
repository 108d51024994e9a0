//! Spawning of external tools: generators and package managers

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{anyhow, Context, Result};

use crate::errors::CreateError;

/// A program, its arguments and where to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// `None` runs in the invoking directory
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Turn a non-zero exit into [`CreateError::ProcessFailed`], carrying the captured stderr
    pub fn ensure_success(self, program: &str) -> Result<Self, CreateError> {
        if self.success() {
            return Ok(self);
        }
        let stderr = self.stderr_text();
        let message = if !stderr.is_empty() {
            stderr
        } else if let Some(code) = self.code {
            format!("`{program}` exited with status {code}")
        } else {
            format!("`{program}` was terminated by a signal")
        };
        Err(CreateError::ProcessFailed {
            program: program.to_string(),
            message,
        })
    }
}

type LineCallback<'a> = Box<dyn FnMut(&str) + Send + 'a>;

/// Optional callbacks for a streamed process
#[derive(Default)]
pub struct ProcessHandler<'a> {
    pub on_data: Option<LineCallback<'a>>,
    pub on_error: Option<LineCallback<'a>>,
    pub on_exit: Option<Box<dyn FnOnce(Option<i32>) + 'a>>,
}

impl<'a> ProcessHandler<'a> {
    pub fn on_data(mut self, f: impl FnMut(&str) + Send + 'a) -> Self {
        self.on_data = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnMut(&str) + Send + 'a) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_exit(mut self, f: impl FnOnce(Option<i32>) + 'a) -> Self {
        self.on_exit = Some(Box::new(f));
        self
    }
}

/// Run to completion and capture both output streams
pub fn exec_sync(invocation: &Invocation) -> Result<ProcessOutput> {
    let output = invocation
        .command()
        .stdin(Stdio::inherit())
        .output()
        .with_context(|| format!("failed to run `{}`", invocation.program))?;
    Ok(ProcessOutput {
        code: output.status.code(),
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// Run to completion, handing every output line to `handler` as it arrives.
/// The full output is still captured and returned.
pub fn exec(invocation: &Invocation, handler: ProcessHandler<'_>) -> Result<ProcessOutput> {
    let mut child = invocation
        .command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run `{}`", invocation.program))?;
    let stdout = child.stdout.take().context("stdout not captured")?;
    let stderr = child.stderr.take().context("stderr not captured")?;

    let ProcessHandler {
        on_data,
        on_error,
        on_exit,
    } = handler;

    let drained = thread::scope(|scope| -> Result<(Vec<u8>, Vec<u8>)> {
        let stderr_reader = scope.spawn(move || drain_lines(stderr, on_error));
        let stdout = drain_lines(stdout, on_data)?;
        let stderr = stderr_reader
            .join()
            .map_err(|_| anyhow!("stderr reader of `{}` panicked", invocation.program))??;
        Ok((stdout, stderr))
    });

    // reaped even when reading its output failed
    let status = child
        .wait()
        .with_context(|| format!("failed to wait for `{}`", invocation.program))?;
    let (stdout, stderr) = drained?;
    if let Some(on_exit) = on_exit {
        on_exit(status.code());
    }

    Ok(ProcessOutput {
        code: status.code(),
        stdout,
        stderr,
    })
}

fn drain_lines(reader: impl Read, mut callback: Option<LineCallback<'_>>) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(reader);
    let mut captured = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        captured.extend_from_slice(&line);
        if let Some(callback) = callback.as_mut() {
            let text = String::from_utf8_lossy(&line);
            callback(text.trim_end_matches(['\r', '\n']));
        }
    }
    Ok(captured)
}

/// Seam between the pipeline and the host's process table
pub trait CommandRunner {
    /// Blocking spawn with captured output
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput>;

    /// Blocking spawn with live output callbacks
    fn stream(
        &mut self,
        invocation: &Invocation,
        handler: ProcessHandler<'_>,
    ) -> Result<ProcessOutput> {
        let output = self.run(invocation)?;
        if let Some(on_exit) = handler.on_exit {
            on_exit(output.code);
        }
        Ok(output)
    }
}

/// Spawns real processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput> {
        exec_sync(invocation)
    }

    fn stream(
        &mut self,
        invocation: &Invocation,
        handler: ProcessHandler<'_>,
    ) -> Result<ProcessOutput> {
        exec(invocation, handler)
    }
}
