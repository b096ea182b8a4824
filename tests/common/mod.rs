// Shared test helpers: a scratch fixture with a KDL config, a scripted
// shell backend, and a marker file recording whether the backend ever ran.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_cvs-taginfo-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the hook binary with the given arguments.
/// Returns (stdout, stderr, exit_code).
pub fn run_taginfo<I, S>(args: I) -> (String, String, i32)
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(binary_path())
        .args(args)
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// How the scripted backend should answer.
pub enum Backend {
    Grant,
    Deny(&'static str),
    Exit(i32),
    Garbage,
}

pub struct Fixture {
    pub dir: TempDir,
    pub config: PathBuf,
    marker: PathBuf,
}

impl Fixture {
    pub fn new(backend: Backend) -> Self {
        Self::with_config(backend, "")
    }

    /// Build a fixture whose config points at a scripted backend and uses
    /// the fixture directory as temp-dir. `extra` is appended verbatim to
    /// the KDL config.
    pub fn with_config(backend: Backend, extra: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let marker = dir.path().join("backend-invoked");

        let answer = match backend {
            Backend::Grant => r#"printf '{"granted":true,"errors":[]}'"#.to_string(),
            Backend::Deny(error) => {
                format!(r#"printf '{{"granted":false,"errors":["{error}"]}}'"#)
            }
            Backend::Exit(code) => format!("exit {code}"),
            Backend::Garbage => "echo not-json".to_string(),
        };
        let script = dir.path().join("backend.sh");
        fs::write(
            &script,
            format!("cat >/dev/null\n: > \"{}\"\n{answer}\n", marker.display()),
        )
        .expect("failed to write backend script");

        let config = dir.path().join("taginfo.kdl");
        fs::write(
            &config,
            format!(
                "backend {{\n    command \"sh\" \"{}\"\n}}\ntemp-dir \"{}\"\n{extra}\n",
                script.display(),
                dir.path().display(),
            ),
        )
        .expect("failed to write config");

        Fixture {
            dir,
            config,
            marker,
        }
    }

    pub fn config_str(&self) -> &str {
        self.config.to_str().unwrap()
    }

    pub fn backend_was_invoked(&self) -> bool {
        self.marker.exists()
    }

    /// Contents of the lastlog scratch file for this process group, if the
    /// hook wrote one. The spawned hook inherits the test's process group.
    pub fn lastlog_contents(&self) -> Option<String> {
        let pgid = unsafe { libc::getpgrp() };
        fs::read_to_string(self.dir.path().join(format!("taginfo-lastlog.{pgid}"))).ok()
    }
}

/// Standard argument line: tag REL_1_0 in directory "modules".
pub fn tag_args(
    config: &str,
    username: &str,
    type_code: &str,
    op_code: &str,
    tail: &[&str],
) -> Vec<String> {
    let mut args = vec![
        config.to_string(),
        username.to_string(),
        "REL_1_0".to_string(),
        type_code.to_string(),
        op_code.to_string(),
        "modules".to_string(),
    ];
    args.extend(tail.iter().map(|s| s.to_string()));
    args
}

/// One well-formed file group.
pub const ONE_FILE: &[&str] = &["foo.php", "", "1.1", "1.2"];
