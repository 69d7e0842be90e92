//! PostgreSQL pool construction
//!
//! The pool is built once by the CLI, handed to `PgStore`, and closed by
//! `AppState::shutdown` after the listener stops.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap used when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool settings shared by the eager and lazy constructors.
fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(max_connections.max(1))
}

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect and fail fast: the first connection is opened before returning,
/// so a bad URL or unreachable server surfaces at startup rather than on the
/// first request. A cap of 0 is raised to 1.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to database");
    pool_options(max_connections).connect(database_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cap_is_raised_to_one() {
        assert_eq!(pool_options(0).get_max_connections(), 1);
        assert_eq!(pool_options(12).get_max_connections(), 12);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_round_trips_a_query() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let (one,): (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(one, 1);
        pool.close().await;
    }
}
