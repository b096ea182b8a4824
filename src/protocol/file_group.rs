/// Literal revision token CVS uses for "no revision on this side", e.g. the
/// new revision when a tag is being removed from a file.
pub const NO_REVISION: &str = "NONE";

/// Number of tokens per file in the invocation tail.
pub const GROUP_LEN: usize = 4;

/// One tagged or branched file from the invocation tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRevisionEntry {
    pub filename: String,
    /// Branch the file revision lives on. CVS sends an empty token for the
    /// trunk; callers substitute `HEAD` when building items.
    pub source_branch: Option<String>,
    pub old_revision: String,
    pub new_revision: String,
}

impl FileRevisionEntry {
    /// The revision the operation actually applies to: the new revision
    /// unless CVS reported `NONE` for it, in which case the old one.
    pub fn effective_revision(&self) -> &str {
        if self.new_revision == NO_REVISION {
            &self.old_revision
        } else {
            &self.new_revision
        }
    }
}

/// The invocation tail did not divide into whole file groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("file revision list has {len} trailing arguments, expected groups of four")]
pub struct MalformedFileList {
    pub len: usize,
}

/// Parse the invocation tail strictly in groups of [`GROUP_LEN`] tokens.
///
/// The grouping is an invariant of the taginfo calling convention: a ragged
/// tail means CVS and the hook disagree about the format string, so no
/// partial result is returned.
pub fn parse_groups(tail: &[String]) -> Result<Vec<FileRevisionEntry>, MalformedFileList> {
    if tail.len() % GROUP_LEN != 0 {
        return Err(MalformedFileList { len: tail.len() });
    }

    Ok(tail
        .chunks_exact(GROUP_LEN)
        .map(|group| FileRevisionEntry {
            filename: group[0].clone(),
            source_branch: if group[1].is_empty() {
                None
            } else {
                Some(group[1].clone())
            },
            old_revision: group[2].clone(),
            new_revision: group[3].clone(),
        })
        .collect())
}
