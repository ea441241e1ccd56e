mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Sharing - Motor de Reservas");
    info!("======================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let app_state = AppState::new(pool, config);
    let app = routes::create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🚙 Vehículos:");
    info!("   POST   /api/vehicles/available - Vehículos libres para una franja");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PATCH  /api/vehicles/:id/status - Actualizar estado (flota)");
    info!("📅 Reservas:");
    info!("   POST   /api/reservations - Crear reserva");
    info!("   GET    /api/reservations/user - Reservas del usuario");
    info!("   PUT    /api/reservations/:id - Modificar reserva");
    info!("   DELETE /api/reservations/:id - Cancelar reserva");
    info!("🔑 Auth:");
    info!("   GET    /api/verify-token - Validar token");

    // Iniciar servidor con apagado graceful
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
