//! Call-scoped to-do list.
//!
//! Every [`handle`] call starts from an empty [`TodoList`] and drops it on
//! return, so nothing carries over between invocations: `list` only ever
//! prints the header and `remove` always misses.

use serde::Serialize;
use std::{convert::TryFrom, fmt};
use tracing::debug;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoAction {
    Add,
    List,
    Remove,
}

impl TodoAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoAction::Add => "add",
            TodoAction::List => "list",
            TodoAction::Remove => "remove",
        }
    }

    pub const fn all() -> &'static [TodoAction] {
        &[TodoAction::Add, TodoAction::List, TodoAction::Remove]
    }
}

impl fmt::Display for TodoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoAction {
    type Error = ToolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "add" => Ok(TodoAction::Add),
            "list" => Ok(TodoAction::List),
            "remove" => Ok(TodoAction::Remove),
            _ => Err(ToolError::UnknownTodoAction(value.to_string())),
        }
    }
}

/// A to-do action together with the data it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    Add(String),
    List,
    Remove(String),
}

impl TodoCommand {
    /// Pair an action with its optional item; `add` and `remove` need one.
    pub fn new(action: TodoAction, item: Option<String>) -> Result<Self, ToolError> {
        let missing = || ToolError::MissingArgument { command: "todo", argument: "an item" };

        match action {
            TodoAction::Add => item.map(TodoCommand::Add).ok_or_else(missing),
            TodoAction::List => Ok(TodoCommand::List),
            TodoAction::Remove => item.map(TodoCommand::Remove).ok_or_else(missing),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

/// Result of removing an item: either it was there, or it wasn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: String) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove the first occurrence of `item`.
    pub fn remove(&mut self, item: &str) -> Removal {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                Removal::Removed
            }
            None => Removal::NotFound,
        }
    }

    pub fn apply(&mut self, command: TodoCommand) -> TodoOutcome {
        match command {
            TodoCommand::Add(item) => {
                self.add(item.clone());
                TodoOutcome::Added { item }
            }
            TodoCommand::List => TodoOutcome::Listed { items: self.items.clone() },
            TodoCommand::Remove(item) => match self.remove(&item) {
                Removal::Removed => TodoOutcome::Removed { item },
                Removal::NotFound => TodoOutcome::NotFound { item },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TodoOutcome {
    Added { item: String },
    Listed { items: Vec<String> },
    Removed { item: String },
    NotFound { item: String },
}

impl fmt::Display for TodoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoOutcome::Added { item } => write!(f, "Added: {item}"),
            TodoOutcome::Listed { items } => {
                f.write_str("To-Do List:")?;
                for item in items {
                    write!(f, "\n- {item}")?;
                }
                Ok(())
            }
            TodoOutcome::Removed { item } => write!(f, "Removed: {item}"),
            TodoOutcome::NotFound { item } => write!(f, "Item not found: {item}"),
        }
    }
}

/// Run one to-do command against a fresh, empty list.
pub fn handle(command: TodoCommand) -> TodoOutcome {
    let mut list = TodoList::new();
    let outcome = list.apply(command);
    debug!(?outcome, "todo command handled");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_as_str_roundtrip() {
        for action in TodoAction::all() {
            assert_eq!(TodoAction::try_from(action.as_str()), Ok(*action));
        }
        assert!(TodoAction::try_from("edit").is_err());
    }

    #[test]
    fn command_requires_item_for_add_and_remove() {
        assert!(matches!(
            TodoCommand::new(TodoAction::Add, None),
            Err(ToolError::MissingArgument { command: "todo", .. })
        ));
        assert!(TodoCommand::new(TodoAction::Remove, None).is_err());
        assert_eq!(TodoCommand::new(TodoAction::List, None), Ok(TodoCommand::List));
        assert_eq!(
            TodoCommand::new(TodoAction::List, Some("ignored".into())),
            Ok(TodoCommand::List)
        );
    }

    #[test]
    fn list_keeps_insertion_order_and_removes_first_occurrence() {
        let mut list = TodoList::new();
        list.add("milk".into());
        list.add("eggs".into());
        list.add("milk".into());

        assert_eq!(list.remove("milk"), Removal::Removed);
        assert_eq!(list.items(), ["eggs", "milk"]);
        assert_eq!(list.remove("bread"), Removal::NotFound);
    }

    #[test]
    fn apply_within_one_list_accumulates() {
        let mut list = TodoList::new();
        list.apply(TodoCommand::Add("write tests".into()));

        let outcome = list.apply(TodoCommand::List);
        assert_eq!(outcome.to_string(), "To-Do List:\n- write tests");
    }

    #[test]
    fn handle_add_reports_item() {
        let outcome = handle(TodoCommand::Add("buy milk".into()));
        assert_eq!(outcome.to_string(), "Added: buy milk");
    }

    #[test]
    fn separate_calls_do_not_share_state() {
        handle(TodoCommand::Add("buy milk".into()));

        let listed = handle(TodoCommand::List);
        assert_eq!(listed, TodoOutcome::Listed { items: vec![] });
        assert_eq!(listed.to_string(), "To-Do List:");

        let removed = handle(TodoCommand::Remove("buy milk".into()));
        assert_eq!(removed.to_string(), "Item not found: buy milk");
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(TodoOutcome::NotFound { item: "x".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "not_found", "item": "x" }));
    }
}
