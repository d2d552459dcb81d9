//! Contacts and the seeded directory they live in.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    /// Avatar image URI. The terminal renders an initial instead.
    pub avatar: String,
}

impl Contact {
    fn seed(id: &str, name: &str, email: &str, avatar: &str) -> Self {
        Self {
            id: ContactId::new(id),
            name: name.to_owned(),
            email: email.to_owned(),
            avatar: avatar.to_owned(),
        }
    }

    /// First whitespace-separated word of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    /// Single-letter avatar fallback.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// Read-only set of contacts available for chats and group membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn seeded() -> Self {
        Self {
            contacts: vec![
                Contact::seed("u1", "Sofia Davis", "m@example.com", "/avatars/01.png"),
                Contact::seed("u2", "Jackson Lee", "p@example.com", "/avatars/02.png"),
                Contact::seed(
                    "u3",
                    "Isabella Nguyen",
                    "i@example.com",
                    "/avatars/03.png",
                ),
            ],
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// Contacts whose name or email contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| needle.is_empty() || contact.matches(&needle))
            .collect()
    }

    /// Comma-joined first names of the given members, skipping unknown ids.
    pub fn first_names(&self, members: &[ContactId]) -> String {
        members
            .iter()
            .filter_map(|id| self.get(id))
            .map(Contact::first_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}
