//! Database connection management

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use tracing::info;

/// Build driver options from configuration.
///
/// Each parameter goes through its own setter, so quotes or spaces in a
/// password cannot leak into other connection keywords.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    match &config.application_name {
        Some(name) => options.application_name(name),
        None => options,
    }
}

/// Open a single connection to the store. One attempt, no retry.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, sqlx::Error> {
    info!("Opening carrier directory connection");
    info!("Database target: {}", describe_target(config));

    let conn = connect_options(config).connect().await?;

    info!("Carrier directory connection established");

    Ok(conn)
}

/// Connection target for logging, without the password
fn describe_target(config: &DatabaseConfig) -> String {
    format!(
        "postgres://{}:****@{}:{}/{}",
        config.user, config.host, config.port, config.database
    )
}
