use serde::Deserialize;

/// The backend's answer to an access request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verdict {
    pub granted: bool,
    /// Human-readable explanations for a denial, in the order the backend
    /// produced them. Usually empty on a grant.
    #[serde(default)]
    pub errors: Vec<String>,
}
