use std::path::PathBuf;

/// One taginfo invocation, as handed over by the CVS daemon.
///
/// Field order mirrors the positional argument line CVS builds from the
/// `CVSROOT/taginfo` format string. Immutable once constructed; the raw
/// per-file tail stays unparsed here because the allow-list check must be
/// able to pass before the tail is ever looked at.
#[derive(Debug)]
pub struct Invocation {
    pub config_path: PathBuf,
    pub username: String,
    /// The tag or branch name; which one it is depends on `type_code`.
    pub tag: String,
    pub type_code: TypeCode,
    pub op_code: OpCode,
    pub directory: String,
    /// Raw file-group tail: `<filename> <source_branch> <old_rev> <new_rev>`
    /// repeated, to be parsed by [`crate::protocol::file_group`].
    pub file_args: Vec<String>,
}

/// CVS type code distinguishing tags from branches.
///
/// Kept total — an unrecognized code is carried as [`TypeCode::Other`] so
/// the decision stage can report it at the right point instead of the
/// parser guessing. CVS sends `?` here on deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCode {
    /// `"N"`: an immutable named snapshot.
    Tag,
    /// `"T"`: a named line of development.
    Branch,
    /// Anything else, unsupported for non-delete operations.
    Other(String),
}

impl TypeCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "N" => TypeCode::Tag,
            "T" => TypeCode::Branch,
            other => TypeCode::Other(other.to_string()),
        }
    }
}

/// CVS operation code for the tag command.
///
/// Total for the same reason as [`TypeCode`]: resolution of an unknown code
/// into a fatal error happens in the decision stage, after the allow-list
/// short-circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpCode {
    /// `"add"`: create the tag or branch.
    Add,
    /// `"mov"`: move an existing tag (`cvs tag -F`).
    Move,
    /// `"del"`: delete the tag or branch (`cvs tag -d`).
    Delete,
    /// Anything else, always fatal.
    Other(String),
}

impl OpCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "add" => OpCode::Add,
            "mov" => OpCode::Move,
            "del" => OpCode::Delete,
            other => OpCode::Other(other.to_string()),
        }
    }
}
