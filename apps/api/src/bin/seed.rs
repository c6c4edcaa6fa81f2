use sqlx::PgPool;
use todo_api::config::Config;
use todo_api::repositories::PgTodoRepository;
use todo_api::{database, logging, seed};

async fn run(pool: &PgPool) -> anyhow::Result<()> {
    database::migrate(pool).await?;

    let report = seed::run(&PgTodoRepository::new(pool.clone())).await;
    if report.failed > 0 {
        tracing::warn!(failed = report.failed, "Some todos were not created");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    logging::init(config.log_level())?;

    let pool = database::connect(config.database()).await?;
    let result = run(&pool).await;
    pool.close().await;

    // An error returned from main exits with status 1
    if let Err(e) = &result {
        tracing::error!(error = %e, "Seeding failed");
    }
    result
}
