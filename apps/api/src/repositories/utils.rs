//! Shared SQL fragments for repositories

/// SQL columns for todo queries
pub const TODO_COLUMNS: &str = r#"
    id, description, completed,
    created_at, updated_at
"#;
