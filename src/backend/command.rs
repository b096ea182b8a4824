use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::config::BackendConfig;
use crate::domain::{AccessRequest, Verdict};

use super::{AccessBackend, BackendError};

/// Backend that shells out to the configured authorization command.
///
/// The request is serialized as one JSON document on the command's stdin;
/// the command answers with one JSON verdict (`{"granted": bool, "errors":
/// [...]}`) on stdout. A nonzero exit, an unspawnable command, or
/// undecodable output all surface as [`BackendError`].
#[derive(Debug)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    pub fn new(config: &BackendConfig) -> Self {
        CommandBackend {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    fn check(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        let payload = serde_json::to_string(request)?;
        log::debug!("invoking authorization backend: {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| self.command_error(source))?;

        // The command may answer without reading the request; a broken pipe
        // here is not a failure as long as a verdict comes back.
        let mut stdin = child.stdin.take().expect("child stdin is piped");
        let write_result = stdin.write_all(payload.as_bytes());
        drop(stdin);
        if let Err(e) = write_result {
            if e.kind() != ErrorKind::BrokenPipe {
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.command_error(e));
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| self.command_error(source))?;
        if !output.status.success() {
            return Err(BackendError::Failed {
                command: self.program.clone(),
                status: output.status,
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }

    fn command_error(&self, source: std::io::Error) -> BackendError {
        BackendError::Command {
            command: self.program.clone(),
            source,
        }
    }
}

impl AccessBackend for CommandBackend {
    fn check_tag_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        self.check(request)
    }

    fn check_branch_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        self.check(request)
    }
}
