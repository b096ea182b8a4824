use serde::Serialize;

/// What the operation does to the tag or branch, resolved from the CVS
/// operation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Added,
    Moved,
    Deleted,
}
