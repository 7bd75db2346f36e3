//! Database metrics collection.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record how long a named query took.
pub fn record_query_duration(query_name: &'static str, duration_secs: f64) {
    histogram!("database_query_duration_seconds", "query" => query_name).record(duration_secs);
}

pub fn record_query_error(query_name: &'static str) {
    counter!("database_query_errors_total", "query" => query_name).increment(1);
}

/// Record connection pool occupancy.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("database_connections_active").set(size.saturating_sub(idle) as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times one database operation and counts its failures.
///
/// ```ignore
/// QueryTimer::new("list_ads_by_game")
///     .finish(sqlx::query_as::<_, AdListingEntity>(...).fetch_all(&pool).await)
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Records the elapsed time and passes the query result through.
    pub fn finish<T>(self, result: Result<T, sqlx::Error>) -> Result<T, sqlx::Error> {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            tracing::debug!(query = self.query_name, error = %e, "Query failed");
            record_query_error(self.query_name);
        }
        result
    }
}
