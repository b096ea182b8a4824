use serde::Serialize;

/// The name being operated on, tagged by what CVS says it is.
///
/// Exactly one of the two is ever populated for a request; serialization
/// flattens into a `tag_name` or `branch_name` field so the backend sees
/// the same shape it would get from any other client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RefName {
    #[serde(rename = "tag_name")]
    Tag(String),
    #[serde(rename = "branch_name")]
    Branch(String),
}

impl RefName {
    pub fn as_str(&self) -> &str {
        match self {
            RefName::Tag(name) | RefName::Branch(name) => name,
        }
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
