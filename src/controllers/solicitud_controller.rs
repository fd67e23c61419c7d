use std::sync::Arc;

use tracing::info;

use crate::models::solicitud::{CambiosSolicitud, NuevaSolicitud, Solicitud};
use crate::repositories::SolicitudStore;
use crate::services::csv_projector::exportar_a_csv;
use crate::services::filter_builder::SolicitudFilter;
use crate::utils::errors::{not_found_error, AppResult};

const NO_ENCONTRADA: &str = "Solicitud no encontrada";

pub struct SolicitudController {
    store: Arc<dyn SolicitudStore>,
}

impl SolicitudController {
    pub fn new(store: Arc<dyn SolicitudStore>) -> Self {
        Self { store }
    }

    pub async fn crear(&self, nueva: NuevaSolicitud) -> AppResult<Solicitud> {
        let solicitud = self.store.create(nueva).await?;
        info!("Solicitud {} creada", solicitud.id);
        Ok(solicitud)
    }

    pub async fn actualizar(&self, id: i32, cambios: CambiosSolicitud) -> AppResult<Solicitud> {
        let solicitud = self
            .store
            .update(id, cambios)
            .await?
            .ok_or_else(|| not_found_error(NO_ENCONTRADA))?;
        info!("Solicitud {} actualizada", id);
        Ok(solicitud)
    }

    /// Lista con filtro; un resultado vacío es 404
    pub async fn listar(&self, filter: &SolicitudFilter) -> AppResult<Vec<Solicitud>> {
        let solicitudes = self.store.find_many(filter).await?;
        if solicitudes.is_empty() {
            return Err(not_found_error("No se encontraron solicitudes"));
        }
        Ok(solicitudes)
    }

    pub async fn obtener(&self, id: i32) -> AppResult<Solicitud> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(NO_ENCONTRADA))
    }

    pub async fn eliminar(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found_error(NO_ENCONTRADA));
        }
        info!("Solicitud {} eliminada", id);
        Ok(())
    }

    /// Exporta a CSV; sin coincidencias se devuelve sólo el encabezado
    pub async fn exportar_csv(&self, filter: &SolicitudFilter, campos: &[String]) -> AppResult<String> {
        let solicitudes = self.store.find_many(filter).await?;
        info!("Exportando {} solicitudes a CSV", solicitudes.len());
        exportar_a_csv(&solicitudes, campos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Categoria, Estatus};
    use crate::repositories::MemoryStore;
    use crate::utils::errors::AppError;

    fn controller() -> SolicitudController {
        SolicitudController::new(Arc::new(MemoryStore::new()))
    }

    fn nueva() -> NuevaSolicitud {
        NuevaSolicitud {
            titulo: "Monitor".to_string(),
            descripcion: "Compra de monitor adicional".to_string(),
            categoria: Categoria::Compra,
            estatus: Estatus::Pendiente,
            usuario_solicitante: "Lucia".to_string(),
        }
    }

    #[tokio::test]
    async fn test_listar_vacio_es_not_found() {
        let err = controller().listar(&SolicitudFilter::default()).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "No se encontraron solicitudes"),
            other => panic!("{:?}", other),
        }
    }

    #[tokio::test]
    async fn test_eliminar_es_terminal() {
        let controller = controller();
        let creada = controller.crear(nueva()).await.unwrap();

        controller.eliminar(creada.id).await.unwrap();
        assert!(matches!(controller.obtener(creada.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(controller.eliminar(creada.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exportar_sin_coincidencias() {
        let controller = controller();
        controller.crear(nueva()).await.unwrap();

        let filtro = SolicitudFilter {
            categoria: Some(Categoria::Permiso),
            estatus: None,
        };
        let csv = controller.exportar_csv(&filtro, &["id".to_string()]).await.unwrap();
        assert_eq!(csv, "id\n");
    }
}
