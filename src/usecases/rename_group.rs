use thiserror::Error;

use crate::domain::group::{GroupId, GroupRegistry, RenameOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameGroupError {
    #[error("group {0} does not exist")]
    UnknownGroup(GroupId),
}

/// Applies a confirmed rename; blank input keeps the current name.
pub fn rename_group(
    registry: &mut GroupRegistry,
    id: &GroupId,
    proposed: &str,
) -> Result<RenameOutcome, RenameGroupError> {
    let outcome = registry
        .rename(id, proposed)
        .ok_or_else(|| RenameGroupError::UnknownGroup(id.clone()))?;

    tracing::debug!(group_id = %id, ?outcome, "group rename applied");
    Ok(outcome)
}
