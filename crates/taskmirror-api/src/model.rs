//! Local entities and the remote payload shapes they are mapped from
//!
//! Remote payloads mirror the wire format of the (out-of-scope) transport and
//! are converted into local entities via `From` impls at the reconciliation
//! boundary, so the rest of the core never touches wire shapes directly.

use serde::{Deserialize, Serialize};

/// A todo item as held in local state.
///
/// Identity is `id` (stable, unique within a collection); every other field
/// is freely replaced by an authoritative remote update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }
}

/// A todo record as returned by the remote source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Todo {
            id: record.id,
            title: record.title,
            completed: record.completed,
        }
    }
}

/// Payload of the todos query: the full remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosPayload {
    pub todos: Vec<TodoRecord>,
}

/// Aggregate statistics as exposed to the view layer.
///
/// `completed_todos <= total_todos` is guaranteed by the remote source and
/// not re-checked here. Ephemeral: recomputed on every query resolution,
/// never persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_todos: u64,
    pub completed_todos: u64,
}

/// Aggregate statistics record as returned by the remote source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewRecord {
    pub total_todos: u64,
    pub completed_todos: u64,
}

impl From<OverviewRecord> for OverviewStats {
    fn from(record: OverviewRecord) -> Self {
        OverviewStats {
            total_todos: record.total_todos,
            completed_todos: record.completed_todos,
        }
    }
}

/// Payload of the overview query.
///
/// `overview` is optional on the wire; the projection layer exposes stats iff
/// it is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewPayload {
    pub overview: Option<OverviewRecord>,
}

/// Variables of the toggle mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleVariables {
    pub id: String,
}

impl ToggleVariables {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Envelope of a mutation result.
///
/// `data: None` is a valid success: the mutation completed but returned no
/// authoritative record, which downstream treats as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReply<T> {
    pub data: Option<T>,
}

impl<T> MutationReply<T> {
    pub fn of(record: T) -> Self {
        Self { data: Some(record) }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_into_todo() {
        let record = TodoRecord {
            id: "1".to_string(),
            title: "From Remote".to_string(),
            completed: true,
        };
        let todo: Todo = record.into();
        assert_eq!(todo.id, "1");
        assert_eq!(todo.title, "From Remote");
        assert!(todo.completed);
    }

    #[test]
    fn test_overview_record_wire_format() {
        let record: OverviewRecord =
            serde_json::from_str(r#"{"totalTodos":5,"completedTodos":2}"#).unwrap();
        assert_eq!(record.total_todos, 5);
        assert_eq!(record.completed_todos, 2);

        let stats: OverviewStats = record.into();
        assert_eq!(stats.total_todos, 5);
        assert_eq!(stats.completed_todos, 2);
    }

    #[test]
    fn test_mutation_reply_constructors() {
        let reply = MutationReply::of(TodoRecord {
            id: "1".to_string(),
            title: "t".to_string(),
            completed: false,
        });
        assert!(reply.data.is_some());

        let reply: MutationReply<TodoRecord> = MutationReply::empty();
        assert!(reply.data.is_none());
    }
}
