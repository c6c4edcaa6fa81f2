//! Ordering specification for todo listings
//!
//! The GraphQL layer picks a field and a direction; this module maps them to
//! fixed column names and renders the `ORDER BY` clause. Incomplete todos
//! always sort ahead of completed ones, and the requested field ordering is
//! applied within each group.

use std::cmp::Ordering;
use std::fmt;

use crate::models::Todo;

/// Sortable todo fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOrderField {
    CreatedAt,
    UpdatedAt,
}

impl TodoOrderField {
    /// Database column backing this field
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Full ordering for a todo listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoOrdering {
    field: Option<(TodoOrderField, SortDirection)>,
}

impl TodoOrdering {
    /// Completion grouping only
    pub fn new() -> Self {
        Self::default()
    }

    /// Order by `field`, ascending unless `direction` says otherwise
    ///
    /// A direction without a field is ignored.
    pub fn from_parts(field: Option<TodoOrderField>, direction: Option<SortDirection>) -> Self {
        Self {
            field: field.map(|f| (f, direction.unwrap_or_default())),
        }
    }

    /// Builder-style field ordering
    pub fn by(mut self, field: TodoOrderField, direction: SortDirection) -> Self {
        self.field = Some((field, direction));
        self
    }

    /// Render the `ORDER BY` clause body (without the keywords)
    pub fn to_sql(&self) -> String {
        let mut terms = vec!["completed ASC".to_string()];
        if let Some((field, direction)) = self.field {
            terms.push(format!("{} {}", field.column(), direction.keyword()));
        }
        terms.join(", ")
    }

    /// Compare two todos the same way the rendered SQL does
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        let by_completed = a.completed.cmp(&b.completed);
        let Some((field, direction)) = self.field else {
            return by_completed;
        };
        by_completed.then_with(|| match direction {
            SortDirection::Asc => field.compare(a, b),
            SortDirection::Desc => field.compare(b, a),
        })
    }

    /// Sort a slice in place
    pub fn sort(&self, todos: &mut [Todo]) {
        todos.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for TodoOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
