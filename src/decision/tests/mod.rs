// Unit tests for the decision state machine, driven through a scripted
// spy backend so call counts and request contents can be asserted.


use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use crate::backend::{AccessBackend, BackendError};
use crate::config::{BackendConfig, Config};
use crate::domain::{AccessRequest, Verdict};
use crate::protocol::{Invocation, OpCode, TypeCode};

pub(super) enum Script {
    Grant,
    Deny(Vec<&'static str>),
    Fail,
}

/// Backend double: answers from a script and records every call.
pub(super) struct SpyBackend {
    script: Script,
    pub(super) tag_calls: Cell<usize>,
    pub(super) branch_calls: Cell<usize>,
    pub(super) last_request: RefCell<Option<AccessRequest>>,
}

impl SpyBackend {
    pub(super) fn granting() -> Self {
        Self::scripted(Script::Grant)
    }

    pub(super) fn denying(errors: Vec<&'static str>) -> Self {
        Self::scripted(Script::Deny(errors))
    }

    pub(super) fn failing() -> Self {
        Self::scripted(Script::Fail)
    }

    fn scripted(script: Script) -> Self {
        SpyBackend {
            script,
            tag_calls: Cell::new(0),
            branch_calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub(super) fn total_calls(&self) -> usize {
        self.tag_calls.get() + self.branch_calls.get()
    }

    fn answer(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        *self.last_request.borrow_mut() = Some(request.clone());
        match &self.script {
            Script::Grant => Ok(Verdict {
                granted: true,
                errors: vec![],
            }),
            Script::Deny(errors) => Ok(Verdict {
                granted: false,
                errors: errors.iter().map(|s| s.to_string()).collect(),
            }),
            Script::Fail => Err(BackendError::Command {
                command: "spy".into(),
                source: std::io::Error::other("scripted failure"),
            }),
        }
    }
}

impl AccessBackend for SpyBackend {
    fn check_tag_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        self.tag_calls.set(self.tag_calls.get() + 1);
        self.answer(request)
    }

    fn check_branch_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError> {
        self.branch_calls.set(self.branch_calls.get() + 1);
        self.answer(request)
    }
}

pub(super) fn config() -> Config {
    Config {
        backend: BackendConfig {
            program: "/bin/false".into(),
            args: vec![],
        },
        repository_id: 1,
        temp_dir: PathBuf::from("/tmp"),
        allowed_users: vec![],
        allow_tag_removal: true,
        tag_delete_denied_message: "** ERROR: You are not allowed to delete tags.".into(),
        logs_combine: false,
    }
}

pub(super) fn invocation(
    username: &str,
    type_code: &str,
    op_code: &str,
    tail: &[&str],
) -> Invocation {
    Invocation {
        config_path: PathBuf::from("cfg"),
        username: username.into(),
        tag: "REL_1_0".into(),
        type_code: TypeCode::parse(type_code),
        op_code: OpCode::parse(op_code),
        directory: "modules".into(),
        file_args: tail.iter().map(|s| s.to_string()).collect(),
    }
}

/// One well-formed file group: foo.php branched from trunk, 1.1 -> 1.2.
pub(super) const ONE_FILE: &[&str] = &["foo.php", "", "1.1", "1.2"];
