use crate::backend::BackendError;
use crate::config::ConfigError;
use crate::protocol::MalformedFileList;

/// Why an invocation passed without being denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantReason {
    /// Username is on the configured allow-list; nothing else was checked.
    Allowlisted,
    /// Deletion with tag removal globally permitted. The backend is not
    /// consulted because CVS cannot say whether a deletion concerns a tag
    /// or a branch.
    DeletionPermitted,
    /// No file items in the invocation, nothing to control.
    NothingTagged,
    /// The authorization backend granted the request.
    BackendApproved,
}

/// Terminal state of the gateway.
///
/// Every variant owns one stable exit code; CVS treats any nonzero code as
/// a veto of the tag operation and relays stderr to the user.
#[derive(Debug)]
pub enum Outcome {
    Granted(GrantReason),
    /// Too few arguments for a taginfo invocation.
    Usage,
    ConfigFailed(ConfigError),
    /// Deletion attempted while the removal policy forbids it; carries the
    /// configured denial message.
    RemovalDenied(String),
    UnknownOperation(String),
    MalformedFileList(MalformedFileList),
    /// Type code other than "N"/"T" on a non-delete operation.
    UnsupportedType(String),
    /// The backend answered and said no.
    AccessDenied(Vec<String>),
    /// The backend could not answer; deny-closed.
    BackendFailure(BackendError),
}

impl Outcome {
    /// Stable exit-code contract.
    ///
    /// | code | condition |
    /// |------|-----------|
    /// | 0 | granted |
    /// | 1 | backend failure |
    /// | 2 | usage error / malformed file list |
    /// | 3 | config load failure |
    /// | 4 | tag removal denied by policy |
    /// | 5 | unknown operation code |
    /// | 6 | access denied by backend |
    /// | 7 | unsupported type code |
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Granted(_) => 0,
            Outcome::BackendFailure(_) => 1,
            Outcome::Usage | Outcome::MalformedFileList(_) => 2,
            Outcome::ConfigFailed(_) => 3,
            Outcome::RemovalDenied(_) => 4,
            Outcome::UnknownOperation(_) => 5,
            Outcome::AccessDenied(_) => 6,
            Outcome::UnsupportedType(_) => 7,
        }
    }

    /// Message for the user on stderr; `None` when the outcome is silent.
    ///
    /// Denial messages from the backend are joined with a blank line so
    /// multi-item explanations stay readable in the CVS client output. The
    /// removal-denied message is the configured text verbatim. Usage help
    /// is printed by the CLI layer, which knows the program name.
    pub fn stderr_message(&self) -> Option<String> {
        match self {
            Outcome::Granted(_) | Outcome::Usage => None,
            Outcome::ConfigFailed(e) => {
                Some(format!("Error: failed to load configuration file: {e}"))
            }
            Outcome::RemovalDenied(message) => Some(message.clone()),
            Outcome::UnknownOperation(code) => Some(format!("Error: unknown tag action '{code}'.")),
            Outcome::MalformedFileList(e) => Some(format!("Error: {e}")),
            Outcome::UnsupportedType(code) => Some(format!("Error: unsupported tag type '{code}'.")),
            Outcome::AccessDenied(errors) => Some(errors.join("\n\n")),
            Outcome::BackendFailure(e) => Some(format!("Error: {e}")),
        }
    }
}
