use bookcart_app::database;
use tracing::info;

pub(crate) async fn run(database_url: &str) -> Result<String, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    info!("migrations applied");

    Ok("migrations applied".to_string())
}
