//! Structurally-complete defaults with deep partial overrides
//!
//! Every shape that tests need to fabricate implements `Fixture`: a
//! fully-populated default plus a `Patch` type describing a deeply-partial
//! override. Merging follows explicit per-field rules rather than runtime
//! type inspection:
//! - scalar field, `Option<T>` patch: the override replaces the default
//!   wholesale
//! - nested struct field, `Option<Patch>` patch: merge recurses
//! - `Vec` field, `Option<Vec<_>>` patch: the override substitutes the whole
//!   array, never element-wise
//!
//! An empty patch is the identity; patches over disjoint fields commute.

use taskmirror_api::{OverviewPayload, OverviewRecord, OverviewStats, Todo, TodoRecord, TodosPayload};

/// A shape with a structurally-complete default and a deep-merge rule
pub trait Fixture: Sized {
    /// Deeply-partial override; `Default` is the empty patch
    type Patch: Default;

    /// The structurally-complete default value
    fn fixture() -> Self;

    /// Apply `patch` on top of `self`, field by field
    fn merge(self, patch: Self::Patch) -> Self;
}

/// Build a fully-populated `S` from its default and a partial override
pub fn build<S: Fixture>(patch: S::Patch) -> S {
    S::fixture().merge(patch)
}

#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Fixture for Todo {
    type Patch = TodoPatch;

    fn fixture() -> Self {
        Todo {
            id: "todo-1".to_string(),
            title: "Walk the dog".to_string(),
            completed: false,
        }
    }

    fn merge(mut self, patch: TodoPatch) -> Self {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self
    }
}

impl Fixture for TodoRecord {
    type Patch = TodoPatch;

    fn fixture() -> Self {
        TodoRecord {
            id: "todo-1".to_string(),
            title: "Walk the dog".to_string(),
            completed: false,
        }
    }

    fn merge(mut self, patch: TodoPatch) -> Self {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodosPayloadPatch {
    /// Arrays substitute wholesale; there is no per-element override
    pub todos: Option<Vec<TodoRecord>>,
}

impl Fixture for TodosPayload {
    type Patch = TodosPayloadPatch;

    fn fixture() -> Self {
        TodosPayload {
            todos: vec![TodoRecord::fixture()],
        }
    }

    fn merge(mut self, patch: TodosPayloadPatch) -> Self {
        if let Some(todos) = patch.todos {
            self.todos = todos;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewStatsPatch {
    pub total_todos: Option<u64>,
    pub completed_todos: Option<u64>,
}

impl Fixture for OverviewStats {
    type Patch = OverviewStatsPatch;

    fn fixture() -> Self {
        OverviewStats {
            total_todos: 3,
            completed_todos: 1,
        }
    }

    fn merge(mut self, patch: OverviewStatsPatch) -> Self {
        if let Some(total) = patch.total_todos {
            self.total_todos = total;
        }
        if let Some(completed) = patch.completed_todos {
            self.completed_todos = completed;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewRecordPatch {
    pub total_todos: Option<u64>,
    pub completed_todos: Option<u64>,
}

impl Fixture for OverviewRecord {
    type Patch = OverviewRecordPatch;

    fn fixture() -> Self {
        OverviewRecord {
            total_todos: 3,
            completed_todos: 1,
        }
    }

    fn merge(mut self, patch: OverviewRecordPatch) -> Self {
        if let Some(total) = patch.total_todos {
            self.total_todos = total;
        }
        if let Some(completed) = patch.completed_todos {
            self.completed_todos = completed;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewPayloadPatch {
    /// Nested record: merge recurses into the default (or fixture, if the
    /// default carries no record) rather than replacing it wholesale
    pub overview: Option<OverviewRecordPatch>,
}

impl Fixture for OverviewPayload {
    type Patch = OverviewPayloadPatch;

    fn fixture() -> Self {
        OverviewPayload {
            overview: Some(OverviewRecord::fixture()),
        }
    }

    fn merge(mut self, patch: OverviewPayloadPatch) -> Self {
        if let Some(nested) = patch.overview {
            let base = self.overview.unwrap_or_else(OverviewRecord::fixture);
            self.overview = Some(base.merge(nested));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_patch_is_identity() {
        assert_eq!(build::<Todo>(TodoPatch::default()), Todo::fixture());
        assert_eq!(build::<TodoRecord>(TodoPatch::default()), TodoRecord::fixture());
        assert_eq!(
            build::<TodosPayload>(TodosPayloadPatch::default()),
            TodosPayload::fixture()
        );
        assert_eq!(
            build::<OverviewStats>(OverviewStatsPatch::default()),
            OverviewStats::fixture()
        );
        assert_eq!(
            build::<OverviewRecord>(OverviewRecordPatch::default()),
            OverviewRecord::fixture()
        );
        assert_eq!(
            build::<OverviewPayload>(OverviewPayloadPatch::default()),
            OverviewPayload::fixture()
        );
    }

    #[test]
    fn test_stats_override_wins_per_field() {
        let stats: OverviewStats = build(OverviewStatsPatch {
            completed_todos: Some(2),
            ..Default::default()
        });
        assert_eq!(stats.completed_todos, 2);
        assert_eq!(stats.total_todos, OverviewStats::fixture().total_todos);
    }

    #[test]
    fn test_scalar_override_wins_and_unpatched_fields_keep_defaults() {
        let todo: Todo = build(TodoPatch {
            title: Some("Ship it".to_string()),
            ..Default::default()
        });
        assert_eq!(todo.title, "Ship it");
        assert_eq!(todo.id, Todo::fixture().id);
        assert_eq!(todo.completed, Todo::fixture().completed);
    }

    #[test]
    fn test_array_override_substitutes_wholesale() {
        let payload: TodosPayload = build(TodosPayloadPatch {
            todos: Some(vec![
                TodoRecord::fixture().merge(TodoPatch {
                    id: Some("a".to_string()),
                    ..Default::default()
                }),
                TodoRecord::fixture().merge(TodoPatch {
                    id: Some("b".to_string()),
                    ..Default::default()
                }),
            ]),
        });
        // The single default record is gone, not appended to.
        assert_eq!(payload.todos.len(), 2);
        assert_eq!(payload.todos[0].id, "a");
        assert_eq!(payload.todos[1].id, "b");

        let emptied: TodosPayload = build(TodosPayloadPatch {
            todos: Some(vec![]),
        });
        assert!(emptied.todos.is_empty());
    }

    #[test]
    fn test_nested_override_recurses() {
        let payload: OverviewPayload = build(OverviewPayloadPatch {
            overview: Some(OverviewRecordPatch {
                total_todos: Some(10),
                ..Default::default()
            }),
        });
        let overview = payload.overview.unwrap();
        assert_eq!(overview.total_todos, 10);
        // Sibling field keeps its default.
        assert_eq!(
            overview.completed_todos,
            OverviewRecord::fixture().completed_todos
        );
    }

    #[test]
    fn test_disjoint_patches_commute() {
        let id_patch = |t: Todo| {
            t.merge(TodoPatch {
                id: Some("x".to_string()),
                ..Default::default()
            })
        };
        let title_patch = |t: Todo| {
            t.merge(TodoPatch {
                title: Some("y".to_string()),
                ..Default::default()
            })
        };

        assert_eq!(
            title_patch(id_patch(Todo::fixture())),
            id_patch(title_patch(Todo::fixture()))
        );
    }

    proptest! {
        #[test]
        fn prop_patched_paths_always_equal_the_override(
            id in prop::option::of("[a-z0-9-]{1,12}"),
            title in prop::option::of("[ -~]{0,24}"),
            completed in prop::option::of(any::<bool>()),
        ) {
            let patch = TodoPatch { id: id.clone(), title: title.clone(), completed };
            let built: Todo = build(patch);
            let default = Todo::fixture();

            prop_assert_eq!(built.id, id.unwrap_or(default.id));
            prop_assert_eq!(built.title, title.unwrap_or(default.title));
            prop_assert_eq!(built.completed, completed.unwrap_or(default.completed));
        }
    }
}
