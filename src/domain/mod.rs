pub mod action;
pub mod refname;
pub mod request;
pub mod verdict;

pub use action::TagAction;
pub use refname::RefName;
pub use request::{AccessRequest, Item, ItemKind};
pub use verdict::Verdict;
