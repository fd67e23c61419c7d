//! Construcción de filtros
//!
//! Convierte los parámetros `categoria` y `estatus` (texto no confiable)
//! en un filtro de igualdad para el store. Campo presente = restricción,
//! campo ausente = sin restricción.

use crate::models::catalog::{mensaje_categoria_invalida, mensaje_estatus_invalido, Categoria, Estatus};
use crate::models::solicitud::Solicitud;
use crate::utils::errors::{AppError, AppResult, FieldError};

/// Filtro de igualdad sobre solicitudes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolicitudFilter {
    pub categoria: Option<Categoria>,
    pub estatus: Option<Estatus>,
}

impl SolicitudFilter {
    pub fn matches(&self, solicitud: &Solicitud) -> bool {
        self.categoria.map_or(true, |c| solicitud.categoria == c)
            && self.estatus.map_or(true, |e| solicitud.estatus == e)
    }
}

/// Construye el filtro; cadenas vacías cuentan como ausentes
pub fn build_filter(categoria: Option<&str>, estatus: Option<&str>) -> AppResult<SolicitudFilter> {
    let mut filter = SolicitudFilter::default();
    let mut errors = Vec::new();

    if let Some(raw) = categoria.filter(|c| !c.is_empty()) {
        match Categoria::parse(raw) {
            Some(c) => filter.categoria = Some(c),
            None => errors.push(FieldError::new("categoria", mensaje_categoria_invalida())),
        }
    }

    if let Some(raw) = estatus.filter(|e| !e.is_empty()) {
        match Estatus::parse(raw) {
            Some(e) => filter.estatus = Some(e),
            None => errors.push(FieldError::new("estatus", mensaje_estatus_invalido())),
        }
    }

    if errors.is_empty() {
        Ok(filter)
    } else {
        Err(AppError::Validation(errors))
    }
}
