use log::info;
use sqlx::PgPool;

/// Connects to the database, verifies reachability and makes sure the
/// employee collection table exists. Failure here aborts startup.
pub async fn init(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;

    // ping before serving traffic
    sqlx::query("SELECT 1").execute(&pool).await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employees (
             id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
             doc JSONB NOT NULL
         )",
    )
    .execute(&pool)
    .await?;

    info!("connected to database");
    Ok(pool)
}

/// Releases the shared connection pool once the server has stopped.
pub async fn teardown(pool: PgPool) {
    pool.close().await;
    info!("database connection closed");
}
