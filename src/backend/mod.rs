mod command;

pub use command::CommandBackend;

use crate::domain::{AccessRequest, Verdict};

/// An external access-decision service.
///
/// Two entry points mirror the two name spaces CVS distinguishes; the
/// request itself already carries the name as a [`crate::domain::RefName`],
/// so implementations may route both through one code path. The trait is
/// the seam where test doubles and a future deletion lookup plug in.
pub trait AccessBackend {
    fn check_tag_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError>;
    fn check_branch_access(&self, request: &AccessRequest) -> Result<Verdict, BackendError>;
}

/// Failure of the authorization call itself, distinct from a denial.
///
/// All variants are deny-closed at the process boundary — a backend that
/// cannot answer never grants.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to run authorization command '{command}': {source}")]
    Command {
        command: String,
        source: std::io::Error,
    },
    #[error("authorization command '{command}' exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("unreadable verdict from authorization command: {0}")]
    Wire(#[from] serde_json::Error),
}
