use std::error::Error;
use std::sync::Arc;

use portfolio_backend::config::get_variable;
use portfolio_backend::db::PgDb;
use portfolio_backend::environment::{Environment, Stores};
use portfolio_backend::log::{info, initialize_logger};
use portfolio_backend::notify::{AutoConfirm, LogNotifier};
use portfolio_backend::portfolio::Portfolio;
use portfolio_backend::store::S3Store;

/// Renders the public portfolio as JSON on standard output, using the
/// same stores the admin dashboard writes through.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let store = Arc::new(S3Store::from_env().expect("initialize S3 store from environment"));

    info!(logger, "Creating database pool...");
    let connection_string = get_variable("PORTFOLIO_DB_CONNECTION_STRING");
    let pool = sqlx::Pool::connect(&connection_string)
        .await
        .expect("create database pool from PORTFOLIO_DB_CONNECTION_STRING");
    let db = Arc::new(PgDb::new(pool));

    let logger = Arc::new(logger);

    let environment = Environment::new(
        logger.clone(),
        Stores::shared(db),
        store,
        Arc::new(LogNotifier::new(logger.new(slog::o!("part" => "notifications")))),
        Arc::new(AutoConfirm),
    );

    match Portfolio::load(&environment.logger, &environment.stores).await {
        Portfolio::Ready(view) => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Portfolio::NotConfigured => {
            info!(logger, "No profile exists yet; nothing to render");
            println!("{}", serde_json::json!({ "configured": false }));
        }
    }

    Ok(())
}
