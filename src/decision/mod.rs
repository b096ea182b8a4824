mod outcome;

pub use outcome::{GrantReason, Outcome};

use crate::backend::AccessBackend;
use crate::config::Config;
use crate::domain::{AccessRequest, Item, RefName, TagAction};
use crate::protocol::{file_group, Invocation, OpCode, TypeCode};

/// Decide whether the tag or branch operation may proceed.
///
/// Pure over the injected backend, so policy can be tested without a child
/// process. The order of checks is part of the contract:
///
/// 1. allow-list short-circuit — trusted identities never wait on the
///    backend, malformed tails included
/// 2. operation policy — deletions resolve entirely from config
/// 3. file-group parsing — nothing tagged means nothing to control
/// 4. name resolution and the backend call
pub fn decide(invocation: &Invocation, config: &Config, backend: &dyn AccessBackend) -> Outcome {
    if config
        .allowed_users
        .iter()
        .any(|u| u == &invocation.username)
    {
        return Outcome::Granted(GrantReason::Allowlisted);
    }

    let action = match &invocation.op_code {
        OpCode::Add => TagAction::Added,
        OpCode::Move => TagAction::Moved,
        OpCode::Delete => {
            if !config.allow_tag_removal {
                return Outcome::RemovalDenied(config.tag_delete_denied_message.clone());
            }
            // CVS reports '?' for the type code on deletions, so tags and
            // branches cannot be told apart here. Deletions pass without a
            // backend query once the global removal policy allows them.
            return Outcome::Granted(GrantReason::DeletionPermitted);
        }
        OpCode::Other(code) => return Outcome::UnknownOperation(code.clone()),
    };

    let entries = match file_group::parse_groups(&invocation.file_args) {
        Ok(entries) => entries,
        Err(e) => return Outcome::MalformedFileList(e),
    };
    if entries.is_empty() {
        return Outcome::Granted(GrantReason::NothingTagged);
    }

    let name = match &invocation.type_code {
        TypeCode::Tag => RefName::Tag(invocation.tag.clone()),
        TypeCode::Branch => RefName::Branch(invocation.tag.clone()),
        TypeCode::Other(code) => return Outcome::UnsupportedType(code.clone()),
    };

    let items = entries
        .iter()
        .map(|entry| Item::from_entry(entry, &invocation.directory, action))
        .collect();
    let request = AccessRequest {
        action,
        username: invocation.username.clone(),
        repository_id: config.repository_id,
        name,
        items,
    };

    let verdict = match &request.name {
        RefName::Tag(_) => backend.check_tag_access(&request),
        RefName::Branch(_) => backend.check_branch_access(&request),
    };

    match verdict {
        Ok(verdict) if verdict.granted => Outcome::Granted(GrantReason::BackendApproved),
        Ok(verdict) => Outcome::AccessDenied(verdict.errors),
        Err(e) => Outcome::BackendFailure(e),
    }
}

#[cfg(test)]
mod tests;
