use serde::Serialize;

use crate::protocol::FileRevisionEntry;

use super::{RefName, TagAction};

/// Branch substituted when CVS sends an empty source-branch token.
pub const TRUNK: &str = "HEAD";

/// The authorization query sent to the backend.
///
/// Built only when at least one file item survived parsing — an empty item
/// list authorizes trivially and never reaches the backend.
#[derive(Debug, Clone, Serialize)]
pub struct AccessRequest {
    pub action: TagAction,
    pub username: String,
    pub repository_id: i64,
    #[serde(flatten)]
    pub name: RefName,
    pub items: Vec<Item>,
}

/// Denormalized per-file view of the operation, as the backend consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Repository-absolute path: `/<directory>/<filename>`.
    pub path: String,
    pub revision: String,
    /// Absent for deletions — CVS does not report a source branch there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
}

impl Item {
    /// Denormalize one parsed file entry against the invocation directory.
    pub fn from_entry(entry: &FileRevisionEntry, directory: &str, action: TagAction) -> Self {
        let source_branch = (action != TagAction::Deleted).then(|| {
            entry
                .source_branch
                .clone()
                .unwrap_or_else(|| TRUNK.to_string())
        });
        Item {
            kind: ItemKind::File,
            path: format!("/{directory}/{}", entry.filename),
            revision: entry.effective_revision().to_string(),
            source_branch,
        }
    }
}
