//! DTOs de solicitudes
//!
//! Parámetros de consulta tal como llegan por HTTP y su coerción explícita
//! a la forma que esperan los validadores.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query de `GET /solicitudes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListarQuery {
    pub categoria: Option<String>,
    pub estatus: Option<String>,
}

/// Query de `GET /solicitudes/export/csv`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportarQuery {
    pub categoria: Option<String>,
    pub estatus: Option<String>,
    #[serde(rename = "camposLista")]
    pub campos_lista: Option<String>,
}

/// Respuesta de confirmación simple
#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub message: String,
}

impl MensajeResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Un parámetro vacío (`?categoria=`) equivale a no enviarlo
pub fn no_vacio(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Convierte `camposLista` ("id, titulo,estatus") en una lista ordenada.
///
/// Cada entrada se recorta y las vacías se descartan; un parámetro ausente
/// o en blanco produce la lista vacía.
pub fn parse_campos_lista(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|campo| !campo.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

impl ListarQuery {
    pub fn to_input(&self) -> Map<String, Value> {
        filtros_input(self.categoria.as_deref(), self.estatus.as_deref())
    }
}

impl ExportarQuery {
    pub fn campos(&self) -> Vec<String> {
        parse_campos_lista(self.campos_lista.as_deref())
    }

    pub fn to_input(&self) -> Map<String, Value> {
        let mut input = filtros_input(self.categoria.as_deref(), self.estatus.as_deref());
        if no_vacio(self.campos_lista.as_deref()).is_some() {
            let campos = self.campos().into_iter().map(Value::String).collect();
            input.insert("camposLista".to_string(), Value::Array(campos));
        }
        input
    }
}

fn filtros_input(categoria: Option<&str>, estatus: Option<&str>) -> Map<String, Value> {
    let mut input = Map::new();
    if let Some(c) = no_vacio(categoria) {
        input.insert("categoria".to_string(), Value::String(c.to_string()));
    }
    if let Some(e) = no_vacio(estatus) {
        input.insert("estatus".to_string(), Value::String(e.to_string()));
    }
    input
}
