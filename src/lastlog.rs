//! Scratch file recording the last directory a granted tag operation
//! touched, keyed by process group id.
//!
//! CVS runs one hook process per directory of a multi-directory `cvs tag`,
//! all in the same process group. The log-digest mailer reads this file to
//! combine those entries into a single notification. Advisory data only:
//! concurrent writers race last-writer-wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Record `directory` as the last one touched by this process group,
/// replacing any previous entry.
pub(crate) fn record(temp_dir: &Path, directory: &str) -> io::Result<()> {
    fs::write(lastlog_path(temp_dir, process_group_id()), directory)
}

fn lastlog_path(temp_dir: &Path, pgid: libc::pid_t) -> PathBuf {
    temp_dir.join(format!("taginfo-lastlog.{pgid}"))
}

fn process_group_id() -> libc::pid_t {
    // SAFETY: getpgrp has no failure modes and touches no memory.
    unsafe { libc::getpgrp() }
}
