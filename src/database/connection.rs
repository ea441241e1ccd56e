//! Conexión a PostgreSQL
//!
//! Este módulo maneja la conexión a la base de datos con reintentos
//! al arranque y la ejecución de migraciones embebidas.

use std::time::Duration;

use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::database::DatabaseConfig;

const CONN_RETRIES: u32 = 5;
const CONN_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Conexión a la base de datos con su pool compartido
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar con reintentos; la base puede tardar en estar lista
    pub async fn new(config: DatabaseConfig) -> Result<Self, sqlx::Error> {
        let mut last_err: Option<sqlx::Error> = None;

        for attempt in 1..=CONN_RETRIES {
            match config.create_pool().await {
                Ok(pool) => {
                    // Verificar que la conexión realmente funciona
                    match sqlx::query("SELECT 1").execute(&pool).await {
                        Ok(_) => {
                            info!("✅ Conectado a la base de datos");
                            return Ok(Self { pool });
                        }
                        Err(e) => {
                            warn!(
                                "Ping a la base de datos falló (intento {}/{}): {}",
                                attempt, CONN_RETRIES, e
                            );
                            last_err = Some(e);
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        "Conexión a la base de datos falló (intento {}/{}): {}",
                        attempt, CONN_RETRIES, e
                    );
                    last_err = Some(e);
                }
            }

            if attempt < CONN_RETRIES {
                tokio::time::sleep(CONN_RETRY_DELAY).await;
            }
        }

        Err(last_err.unwrap_or(sqlx::Error::PoolClosed))
    }

    /// Conectar usando la configuración por defecto del entorno
    pub async fn new_default() -> Result<Self, sqlx::Error> {
        Self::new(DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones embebidas de la base de datos
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}
