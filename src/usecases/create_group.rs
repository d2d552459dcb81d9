//! Turning the dialog's candidate set into a registered group.

use thiserror::Error;

use crate::domain::{
    contact::{ContactId, Directory},
    group::{Group, GroupId, GroupRegistry},
    group_draft::MIN_GROUP_MEMBERS,
};

use super::contracts::GroupIdSource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateGroupError {
    #[error("a group needs at least two members, got {count}")]
    TooFewMembers { count: usize },
    #[error("contact {0} is not in the directory")]
    UnknownContact(ContactId),
}

/// Registers a group of `members` named after their first names.
///
/// Identical member sets are allowed; each call yields a new group.
pub fn create_group(
    registry: &mut GroupRegistry,
    directory: &Directory,
    ids: &mut dyn GroupIdSource,
    members: Vec<ContactId>,
) -> Result<GroupId, CreateGroupError> {
    if members.len() < MIN_GROUP_MEMBERS {
        return Err(CreateGroupError::TooFewMembers {
            count: members.len(),
        });
    }

    if let Some(unknown) = members.iter().find(|id| directory.get(id).is_none()) {
        return Err(CreateGroupError::UnknownContact(unknown.clone()));
    }

    let id = ids.next_id();
    let name = directory.first_names(&members);
    tracing::info!(group_id = %id, name = %name, members = members.len(), "group created");

    registry.push(Group::new(id.clone(), name, members));
    Ok(id)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Deterministic ids for tests: `g-1`, `g-2`, ...
    #[derive(Debug, Default)]
    pub(crate) struct SequentialIds(u32);

    impl GroupIdSource for SequentialIds {
        fn next_id(&mut self) -> GroupId {
            self.0 += 1;
            GroupId::new(format!("g-{}", self.0))
        }
    }

    fn ids(raw: &[&str]) -> Vec<ContactId> {
        raw.iter().map(|id| ContactId::new(*id)).collect()
    }

    #[test]
    fn names_group_after_member_first_names() {
        let mut registry = GroupRegistry::default();
        let directory = Directory::seeded();

        let id = create_group(
            &mut registry,
            &directory,
            &mut SequentialIds::default(),
            ids(&["u1", "u2"]),
        )
        .expect("two members are enough");

        let group = registry.get(&id).expect("group registered");
        assert_eq!(group.name(), "Sofia, Jackson");
        assert_eq!(group.members(), ids(&["u1", "u2"]).as_slice());
    }

    #[test]
    fn rejects_fewer_than_two_members() {
        let mut registry = GroupRegistry::default();
        let directory = Directory::seeded();
        let mut source = SequentialIds::default();

        assert_eq!(
            create_group(&mut registry, &directory, &mut source, ids(&["u1"])),
            Err(CreateGroupError::TooFewMembers { count: 1 })
        );
        assert_eq!(
            create_group(&mut registry, &directory, &mut source, vec![]),
            Err(CreateGroupError::TooFewMembers { count: 0 })
        );
        assert!(registry.groups().is_empty());
    }

    #[test]
    fn rejects_members_outside_the_directory() {
        let mut registry = GroupRegistry::default();

        let result = create_group(
            &mut registry,
            &Directory::seeded(),
            &mut SequentialIds::default(),
            ids(&["u1", "u9"]),
        );

        assert_eq!(
            result,
            Err(CreateGroupError::UnknownContact(ContactId::new("u9")))
        );
        assert!(registry.groups().is_empty());
    }

    #[test]
    fn duplicate_member_sets_create_distinct_groups() {
        let mut registry = GroupRegistry::default();
        let directory = Directory::seeded();
        let mut source = SequentialIds::default();

        let first = create_group(&mut registry, &directory, &mut source, ids(&["u1", "u3"]))
            .expect("first group");
        let second = create_group(&mut registry, &directory, &mut source, ids(&["u1", "u3"]))
            .expect("second group");

        assert_ne!(first, second);
        assert_eq!(registry.groups().len(), 2);
    }
}
