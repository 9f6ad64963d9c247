use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Builds the full service the same way `main` does, around the given pool.
macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool))
                .wrap(crate::cors())
                .configure(crate::routes::routes::api_configure),
        )
        .await
    };
}

pub(crate) use init_app;

/// A pool that never connects, for requests rejected before any query runs.
pub fn lazy_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("mysql://root@127.0.0.1:1/unreachable")
        .unwrap()
}

/// Connects to `DATABASE_URL` and applies the schema. Used by the `#[ignore]`d
/// storage tests.
pub async fn database_pool() -> MySqlPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for storage tests");
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to apply schema");

    pool
}

/// Email that no other test run has registered.
pub fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}@example.com", prefix, nanos)
}
