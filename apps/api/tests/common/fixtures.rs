//! GraphQL documents used across the integration tests

#![allow(dead_code)]

pub const TODO_FIELDS: &str = "id createdAt updatedAt description completed";

pub fn create_todo(description: &str) -> String {
    format!(
        r#"mutation {{ createTodo(data: {{ description: {} }}) {{ {} }} }}"#,
        serde_json::json!(description),
        TODO_FIELDS
    )
}

pub fn all_todos(args: &str) -> String {
    if args.is_empty() {
        format!("{{ allTodos {{ {} }} }}", TODO_FIELDS)
    } else {
        format!("{{ allTodos({}) {{ {} }} }}", args, TODO_FIELDS)
    }
}

pub fn todo_by_id(id: &str) -> String {
    format!(
        r#"{{ todoById(id: {}) {{ {} }} }}"#,
        serde_json::json!(id),
        TODO_FIELDS
    )
}

pub fn update_todo(field: &str, id: &str, data: &str) -> String {
    format!(
        r#"mutation {{ {}(id: {}, data: {{ {} }}) {{ {} }} }}"#,
        field,
        serde_json::json!(id),
        data,
        TODO_FIELDS
    )
}

pub fn delete_todo(id: &str) -> String {
    format!(
        r#"mutation {{ deleteTodo(id: {}) {{ {} }} }}"#,
        serde_json::json!(id),
        TODO_FIELDS
    )
}
