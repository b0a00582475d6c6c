/// PostgreSQL implementation of CarrierDirectory
use super::database;
use crate::config::DatabaseConfig;
use crate::domain::carrier::{CarrierCredential, CarrierDirectory, E164Mapping, SipUriMapping};
use crate::domain::shared::error::DirectoryError;
use crate::domain::shared::result::Result;
use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::Connection;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

const LOOKUP_CARRIER: &str = r#"
    SELECT username, ha1, domain
    FROM carrier_credentials
    WHERE carrier_name = $1
    LIMIT 1
"#;

const FIND_SIPURI_MAPPING: &str = r#"
    SELECT e164, carrier_name
    FROM number_mapping
    WHERE sipuri = $1
    LIMIT 1
"#;

const FIND_E164_MAPPING: &str = r#"
    SELECT sipuri
    FROM number_mapping
    WHERE e164 = $1 AND carrier_name = $2
    LIMIT 1
"#;

/// Carrier directory over one persistent PostgreSQL connection.
///
/// The connection is opened once at construction and never re-established.
/// Queries on a shared directory run one at a time on that connection.
pub struct PgCarrierDirectory {
    conn: Mutex<PgConnection>,
}

impl PgCarrierDirectory {
    /// Connect with host, database, user and password on the default port
    pub async fn new(host: &str, database: &str, user: &str, password: &str) -> Result<Self> {
        Self::connect(&DatabaseConfig::new(host, database, user, password)).await
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let conn = database::connect(config).await.map_err(|e| {
            error!("Failed to connect to carrier directory: {}", e);
            DirectoryError::Connection(e)
        })?;

        Ok(Self::from_connection(conn))
    }

    /// Wrap an already established connection
    pub fn from_connection(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Round-trip to the server to check the connection is still usable
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.lock().await;
        conn.ping().await.map_err(|e| {
            error!("Carrier directory ping failed: {}", e);
            DirectoryError::Query(e)
        })
    }

    /// Terminate the connection gracefully
    pub async fn close(self) -> Result<()> {
        let conn = self.conn.into_inner();
        match conn.close().await {
            Ok(()) => {
                info!("Carrier directory connection closed");
                Ok(())
            }
            Err(e) => {
                error!("Failed to close carrier directory connection: {}", e);
                Err(DirectoryError::Connection(e))
            }
        }
    }
}

#[async_trait]
impl CarrierDirectory for PgCarrierDirectory {
    async fn lookup_carrier(&self, carrier_name: &str) -> Result<Option<CarrierCredential>> {
        let mut conn = self.conn.lock().await;
        let result = sqlx::query_as::<_, CarrierCredential>(LOOKUP_CARRIER)
            .bind(carrier_name)
            .fetch_optional(&mut *conn)
            .await;

        match result {
            Ok(Some(credential)) => {
                debug!("Found credentials for carrier: {}", carrier_name);
                Ok(Some(credential))
            }
            Ok(None) => {
                debug!("No credentials for carrier: {}", carrier_name);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to look up carrier {}: {}", carrier_name, e);
                Err(DirectoryError::Query(e))
            }
        }
    }

    async fn find_sipuri_mapping(&self, sipuri: &str) -> Result<Option<SipUriMapping>> {
        let mut conn = self.conn.lock().await;
        let mapping = sqlx::query_as::<_, SipUriMapping>(FIND_SIPURI_MAPPING)
            .bind(sipuri)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to find mapping for SIP URI {}: {}", sipuri, e);
                DirectoryError::Query(e)
            })?;

        debug!("SIP URI {} mapped: {}", sipuri, mapping.is_some());
        Ok(mapping)
    }

    async fn find_e164_mapping(
        &self,
        e164: &str,
        carrier_name: &str,
    ) -> Result<Option<E164Mapping>> {
        let mut conn = self.conn.lock().await;
        let mapping = sqlx::query_as::<_, E164Mapping>(FIND_E164_MAPPING)
            .bind(e164)
            .bind(carrier_name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "Failed to find mapping for {} on carrier {}: {}",
                    e164, carrier_name, e
                );
                DirectoryError::Query(e)
            })?;

        debug!(
            "E.164 {} on carrier {} mapped: {}",
            e164,
            carrier_name,
            mapping.is_some()
        );
        Ok(mapping)
    }
}
