//! Call-scoped contact book, with the same lifecycle as [`crate::todo`].

use serde::Serialize;
use std::{convert::TryFrom, fmt};
use tracing::debug;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactAction {
    Add,
    List,
    Remove,
}

impl ContactAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactAction::Add => "add",
            ContactAction::List => "list",
            ContactAction::Remove => "remove",
        }
    }

    pub const fn all() -> &'static [ContactAction] {
        &[ContactAction::Add, ContactAction::List, ContactAction::Remove]
    }
}

impl fmt::Display for ContactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ContactAction {
    type Error = ToolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "add" => Ok(ContactAction::Add),
            "list" => Ok(ContactAction::List),
            "remove" => Ok(ContactAction::Remove),
            _ => Err(ToolError::UnknownContactAction(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name,
            self.phone.as_deref().unwrap_or("-"),
            self.email.as_deref().unwrap_or("-"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactCommand {
    Add(Contact),
    List,
    Remove { name: String },
}

impl ContactCommand {
    /// Build a command from flag values; `add` and `remove` need a name.
    pub fn new(
        action: ContactAction,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ToolError> {
        let missing = || ToolError::MissingArgument { command: "contact", argument: "--name" };

        match action {
            ContactAction::Add => {
                let name = name.ok_or_else(missing)?;
                Ok(ContactCommand::Add(Contact { name, phone, email }))
            }
            ContactAction::List => Ok(ContactCommand::List),
            ContactAction::Remove => Ok(ContactCommand::Remove { name: name.ok_or_else(missing)? }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Drop every contact called `name`; returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.name != name);
        before - self.contacts.len()
    }

    pub fn apply(&mut self, command: ContactCommand) -> ContactOutcome {
        match command {
            ContactCommand::Add(contact) => {
                let name = contact.name.clone();
                self.contacts.push(contact);
                ContactOutcome::Added { name }
            }
            ContactCommand::List => ContactOutcome::Listed { contacts: self.contacts.clone() },
            ContactCommand::Remove { name } => {
                let removed = self.remove_named(&name);
                debug!(%name, removed, "contacts removed");
                ContactOutcome::Removed { name }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ContactOutcome {
    Added { name: String },
    Listed { contacts: Vec<Contact> },
    Removed { name: String },
}

impl fmt::Display for ContactOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactOutcome::Added { name } => write!(f, "Added contact: {name}"),
            ContactOutcome::Listed { contacts } => {
                f.write_str("Contacts:")?;
                for contact in contacts {
                    write!(f, "\n{contact}")?;
                }
                Ok(())
            }
            ContactOutcome::Removed { name } => write!(f, "Removed contact: {name}"),
        }
    }
}

/// Run one contact command against a fresh, empty book.
pub fn handle(command: ContactCommand) -> ContactOutcome {
    let mut book = ContactBook::new();
    let outcome = book.apply(command);
    debug!(?outcome, "contact command handled");
    outcome
}
