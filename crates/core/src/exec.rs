//! External command execution
//!
//! All package-manager, compiler, and transfer invocations go through this
//! module. Commands inherit the caller's environment and stdio so build
//! tools keep their progress output; a non-zero exit aborts the pipeline
//! with a typed error.

use crate::error::CoreError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// A single external command invocation
#[derive(Debug, Clone)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl Cmd {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
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

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// The invocation as a single loggable line
    pub fn describe(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command
    }

    /// Run to completion, failing on a non-zero exit code
    pub async fn run(self) -> Result<(), CoreError> {
        info!(cmd = %self.describe(), cwd = ?self.cwd, "running");

        let status = self.command().status().await?;
        if !status.success() {
            return Err(CoreError::CommandFailed {
                program: self.program,
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Pipe one command's stdout into another's stdin
///
/// Producer and consumer run concurrently. The copy loop finishes when the
/// producer closes its stdout; the consumer's stdin is then dropped to
/// close the write end of the pipe, and both children are awaited so
/// neither is left as a zombie.
pub async fn pipe(producer: Cmd, consumer: Cmd) -> Result<(), CoreError> {
    info!(
        producer = %producer.describe(),
        consumer = %consumer.describe(),
        "piping"
    );

    let mut producer_child = producer.command().stdout(Stdio::piped()).spawn()?;
    let mut consumer_child = consumer.command().stdin(Stdio::piped()).spawn()?;

    let mut stdout = producer_child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("producer stdout not captured"))?;
    let mut stdin = consumer_child
        .stdin
        .take()
        .ok_or_else(|| std::io::Error::other("consumer stdin not captured"))?;

    let copied = tokio::io::copy(&mut stdout, &mut stdin).await?;
    drop(stdin);
    debug!(bytes = copied, "pipe transfer complete");

    let producer_status = producer_child.wait().await?;
    let consumer_status = consumer_child.wait().await?;

    if !producer_status.success() {
        return Err(CoreError::CommandFailed {
            program: producer.program,
            code: producer_status.code(),
        });
    }
    if !consumer_status.success() {
        return Err(CoreError::CommandFailed {
            program: consumer.program,
            code: consumer_status.code(),
        });
    }
    Ok(())
}
