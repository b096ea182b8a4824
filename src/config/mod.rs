use std::path::{Path, PathBuf};

/// Temporary directory used when the config does not name one.
pub const DEFAULT_TEMP_DIR: &str = "/tmp";

/// Denial message used when the config does not override it.
pub const DEFAULT_DENIED_MESSAGE: &str = "** ERROR: You are not allowed to delete tags.";

/// Top-level configuration loaded from a KDL file.
///
/// Constructed once at process start and passed by reference — there is no
/// process-wide config state.
#[derive(Debug)]
pub struct Config {
    pub backend: BackendConfig,
    /// Repository id the backend should resolve the request against.
    pub repository_id: i64,
    /// Where the lastlog scratch file lives; trailing slashes stripped.
    pub temp_dir: PathBuf,
    /// Usernames that bypass every check, even with the backend down.
    pub allowed_users: Vec<String>,
    pub allow_tag_removal: bool,
    pub tag_delete_denied_message: String,
    /// Record the tagged directory for the log-digest mailer.
    pub logs_combine: bool,
}

/// Command line of the external authorization backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub program: String,
    pub args: Vec<String>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc: kdl::KdlDocument = content
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))?;
        Self::from_document(&doc)
    }

    fn from_document(doc: &kdl::KdlDocument) -> Result<Self, ConfigError> {
        let backend = match doc.get("backend").and_then(|n| n.children()) {
            Some(children) => BackendConfig::from_children(children)?,
            None => {
                return Err(ConfigError::ValidationError(
                    "missing backend { command ... } node".into(),
                ))
            }
        };

        let repository_id = doc
            .get("repository")
            .and_then(first_integer)
            .unwrap_or(1);

        let temp_dir = doc
            .get("temp-dir")
            .and_then(first_string)
            .map(|s| normalize_temp_dir(&s))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMP_DIR));

        let (allow_tag_removal, tag_delete_denied_message) =
            match doc.get("tag-removal").and_then(|n| n.children()) {
                Some(children) => (
                    children.get("allow").and_then(first_bool).unwrap_or(true),
                    children
                        .get("denied-message")
                        .and_then(first_string)
                        .unwrap_or_else(|| DEFAULT_DENIED_MESSAGE.to_string()),
                ),
                None => (true, DEFAULT_DENIED_MESSAGE.to_string()),
            };

        let logs_combine = doc
            .get("logs")
            .and_then(|n| n.children())
            .and_then(|c| c.get("combine"))
            .and_then(first_bool)
            .unwrap_or(true);

        Ok(Config {
            backend,
            repository_id,
            temp_dir,
            allowed_users: collect_strings(doc, "allowed-users"),
            allow_tag_removal,
            tag_delete_denied_message,
            logs_combine,
        })
    }
}

impl BackendConfig {
    fn from_children(children: &kdl::KdlDocument) -> Result<Self, ConfigError> {
        let command = children
            .get("command")
            .map(string_entries)
            .unwrap_or_default();
        let mut parts = command.into_iter();
        match parts.next() {
            Some(program) => Ok(BackendConfig {
                program,
                args: parts.collect(),
            }),
            None => Err(ConfigError::ValidationError(
                "backend command must name a program".into(),
            )),
        }
    }
}

/// Collect all string arguments from nodes with the given name.
/// Handles multiple nodes: `allowed-users "a"` + `allowed-users "b"` merges.
fn collect_strings(doc: &kdl::KdlDocument, node_name: &str) -> Vec<String> {
    doc.nodes()
        .iter()
        .filter(|n| n.name().value() == node_name)
        .flat_map(|n| n.entries())
        .filter_map(|e| e.value().as_string().map(String::from))
        .collect()
}

fn string_entries(node: &kdl::KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter_map(|e| e.value().as_string().map(String::from))
        .collect()
}

fn first_string(node: &kdl::KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find_map(|e| e.value().as_string().map(String::from))
}

fn first_integer(node: &kdl::KdlNode) -> Option<i64> {
    node.entries()
        .iter()
        .find_map(|e| e.value().as_integer())
        .map(|i| i as i64)
}

fn first_bool(node: &kdl::KdlNode) -> Option<bool> {
    node.entries().iter().find_map(|e| e.value().as_bool())
}

/// Strip trailing slashes; a bare "/" is kept as the root.
fn normalize_temp_dir(raw: &str) -> PathBuf {
    let stripped = raw.trim_end_matches('/');
    if stripped.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(stripped)
    }
}
