//! User-created groups and the registry that owns them.

use std::fmt;

use super::contact::ContactId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: String,
    members: Vec<ContactId>,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>, members: Vec<ContactId>) -> Self {
        Self {
            id,
            name: name.into(),
            members,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[ContactId] {
        &self.members
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Blank input; the previous name was kept.
    Unchanged,
}

/// Ordered, id-indexed store of groups. Groups are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| &group.id == id)
    }

    pub fn position(&self, id: &GroupId) -> Option<usize> {
        self.groups.iter().position(|group| &group.id == id)
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Replaces the name of `id` with the trimmed `proposed` value.
    ///
    /// Returns `None` when the group does not exist.
    pub fn rename(&mut self, id: &GroupId, proposed: &str) -> Option<RenameOutcome> {
        let group = self.groups.iter_mut().find(|group| &group.id == id)?;

        let trimmed = proposed.trim();
        if trimmed.is_empty() {
            return Some(RenameOutcome::Unchanged);
        }

        group.name = trimmed.to_owned();
        Some(RenameOutcome::Renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: &str) -> Group {
        Group::new(
            GroupId::new(id),
            name,
            vec![ContactId::new("u1"), ContactId::new("u2")],
        )
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut registry = GroupRegistry::default();
        registry.push(group("g-1", "First"));
        registry.push(group("g-2", "Second"));

        let names: Vec<_> = registry.groups().iter().map(Group::name).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(registry.position(&GroupId::new("g-2")), Some(1));
    }

    #[test]
    fn rename_replaces_name_by_id() {
        let mut registry = GroupRegistry::default();
        registry.push(group("g-1", "Sofia, Jackson"));

        let outcome = registry.rename(&GroupId::new("g-1"), "Study Squad");

        assert_eq!(outcome, Some(RenameOutcome::Renamed));
        assert_eq!(
            registry.get(&GroupId::new("g-1")).map(Group::name),
            Some("Study Squad")
        );
    }

    #[test]
    fn rename_trims_submitted_value() {
        let mut registry = GroupRegistry::default();
        registry.push(group("g-1", "Old"));

        registry.rename(&GroupId::new("g-1"), "  New  ");

        assert_eq!(registry.groups()[0].name(), "New");
    }

    #[test]
    fn rename_with_blank_input_keeps_previous_name() {
        let mut registry = GroupRegistry::default();
        registry.push(group("g-1", "Sofia, Jackson"));

        assert_eq!(
            registry.rename(&GroupId::new("g-1"), ""),
            Some(RenameOutcome::Unchanged)
        );
        assert_eq!(
            registry.rename(&GroupId::new("g-1"), " \t "),
            Some(RenameOutcome::Unchanged)
        );
        assert_eq!(registry.groups()[0].name(), "Sofia, Jackson");
    }

    #[test]
    fn rename_of_unknown_group_reports_none() {
        let mut registry = GroupRegistry::default();

        assert_eq!(registry.rename(&GroupId::new("g-404"), "Name"), None);
    }

    #[test]
    fn groups_with_identical_members_coexist() {
        let mut registry = GroupRegistry::default();
        registry.push(group("g-1", "A"));
        registry.push(group("g-2", "A"));

        assert_eq!(registry.groups().len(), 2);
    }
}
