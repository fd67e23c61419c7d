//! Crea el usuario administrador si no existe.
//!
//! Variables: `DATABASE_URL` (obligatoria), `ADMIN_USERNAME` (admin),
//! `ADMIN_PASSWORD` (admin123).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::info;

use solicitudes_api::config::database::DatabaseConfig;
use solicitudes_api::database::DatabaseConnection;
use solicitudes_api::repositories::PgUsuarioRepository;
use solicitudes_api::services::auth_service::crear_usuario_si_no_existe;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let db = DatabaseConnection::new(&DatabaseConfig::new(database_url)).await?;
    db.run_migrations().await?;

    let usuarios = PgUsuarioRepository::new(db.pool().clone());
    let creado = crear_usuario_si_no_existe(&usuarios, &username, &password, bcrypt::DEFAULT_COST)
        .await?;

    if creado.is_none() {
        info!("Nada que hacer");
    }
    Ok(())
}
