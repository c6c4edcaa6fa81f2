//! Example data loader
//!
//! Inserts a fixed set of todos. Every insert is attempted even if others
//! fail; failures are logged and counted in the [`SeedReport`].

use futures_util::future::join_all;

use crate::models::NewTodo;
use crate::repositories::TodoRepository;

/// Todos inserted by the seed tool
pub fn seed_todos() -> Vec<NewTodo> {
    vec![
        NewTodo::new("Example Todo"),
        NewTodo::new("Example Completed Todo").completed(true),
    ]
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub failed: usize,
}

/// Insert `todos` concurrently, settling every insert
pub async fn seed(repo: &dyn TodoRepository, todos: Vec<NewTodo>) -> SeedReport {
    tracing::info!("Seeding Todos...");

    let results = join_all(todos.into_iter().map(|todo| repo.create(todo))).await;

    let mut report = SeedReport::default();
    for result in results {
        match result {
            Ok(todo) => {
                tracing::info!("Created todo with id: {}", todo.id);
                report.created += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create todo");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        created = report.created,
        failed = report.failed,
        "Finished Todos"
    );
    report
}

/// Run the full seeding sequence with the built-in example todos
pub async fn run(repo: &dyn TodoRepository) -> SeedReport {
    tracing::info!("Start seeding...");
    let report = seed(repo, seed_todos()).await;
    tracing::info!("Seeding Finished");
    report
}
