//! Domain layer: core entities and business rules.

pub mod contact;
pub mod conversation;
pub mod course;
pub mod events;
pub mod group;
pub mod group_draft;
pub mod message;
pub mod selection;
pub mod shell_state;
pub mod text_input;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
