use std::sync::Arc;

use todo_api::config::Config;
use todo_api::graphql::SchemaBuilder;
use todo_api::repositories::{PgTodoRepository, TodoRepository};
use todo_api::{database, logging, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `--print-schema` dumps the SDL without touching the database
    if std::env::args().skip(1).any(|arg| arg == "--print-schema") {
        print!("{}", SchemaBuilder::new().build().sdl());
        return Ok(());
    }

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration and initialize logging from LOG_LEVEL
    let config = Config::from_env()?;
    logging::init(config.log_level())?;

    tracing::info!(
        environment = %config.environment(),
        "Starting todo API server on port {}",
        config.port
    );

    let pool = database::connect(config.database()).await?;
    database::migrate(&pool).await?;

    let todos: Arc<dyn TodoRepository> = Arc::new(PgTodoRepository::new(pool));

    let schema = SchemaBuilder::new()
        .introspection(!config.environment().is_production())
        .build();
    tracing::info!("GraphQL schema built");

    let app = routes::app(schema, todos);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 Server Listening at: http://localhost:{}/", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
