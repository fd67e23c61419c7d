use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use solicitudes_api::config::{database::DatabaseConfig, EnvironmentConfig};
use solicitudes_api::database::DatabaseConnection;
use solicitudes_api::repositories::{PgSolicitudRepository, PgUsuarioRepository};
use solicitudes_api::utils::jwt::JwtConfig;
use solicitudes_api::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,solicitudes_api=debug,tower_http=info")),
        )
        .init();

    info!("📋 API de Solicitudes");
    info!("=====================");

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;
    info!("⚙️  Entorno: {}", config.environment);

    // Inicializar base de datos
    let db = match DatabaseConnection::new(&DatabaseConfig::new(&config.database_url)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db.run_migrations().await.context("Error aplicando migraciones")?;

    let pool = db.pool().clone();
    let state = AppState::new(
        JwtConfig::from(&config),
        Arc::new(PgSolicitudRepository::new(pool.clone())),
        Arc::new(PgUsuarioRepository::new(pool)),
    );
    let app = create_app_router(state, &config.cors_origins);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /auth/login - Iniciar sesión");
    info!("   POST /solicitudes - Crear solicitud");
    info!("   GET  /solicitudes?categoria=&estatus= - Listar solicitudes");
    info!("   GET  /solicitudes/:id - Obtener solicitud");
    info!("   PUT  /solicitudes/:id - Actualizar solicitud");
    info!("   DELETE /solicitudes/:id - Eliminar solicitud");
    info!("   GET  /solicitudes/export/csv?categoria=&estatus=&camposLista= - Exportar CSV");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
