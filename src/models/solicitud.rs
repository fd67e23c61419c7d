//! Modelo de Solicitud
//!
//! Este módulo contiene el struct Solicitud y sus variantes para CRUD operations.
//! Mapea a la tabla solicitudes; en JSON los campos se exponen en camelCase.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

use super::catalog::{Categoria, Estatus};

/// Solicitud principal - mapea exactamente a la tabla solicitudes
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Solicitud {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub categoria: Categoria,
    pub estatus: Estatus,
    pub usuario_solicitante: String,
    #[serde(serialize_with = "serialize_fecha")]
    pub fecha_creacion: DateTime<Utc>,
}

impl Solicitud {
    /// Valor textual de un campo por su nombre público.
    ///
    /// Devuelve `None` para nombres fuera del catálogo.
    pub fn field_value(&self, campo: &str) -> Option<String> {
        let value = match campo {
            "id" => self.id.to_string(),
            "titulo" => self.titulo.clone(),
            "descripcion" => self.descripcion.clone(),
            "categoria" => self.categoria.as_str().to_string(),
            "estatus" => self.estatus.as_str().to_string(),
            "fechaCreacion" => formato_fecha(&self.fecha_creacion),
            "usuarioSolicitante" => self.usuario_solicitante.clone(),
            _ => return None,
        };
        Some(value)
    }
}

/// Datos validados para crear una solicitud
#[derive(Debug, Clone, PartialEq)]
pub struct NuevaSolicitud {
    pub titulo: String,
    pub descripcion: String,
    pub categoria: Categoria,
    pub estatus: Estatus,
    pub usuario_solicitante: String,
}

/// Datos validados para actualizar una solicitud.
/// `usuario_solicitante` ausente conserva el valor actual.
#[derive(Debug, Clone, PartialEq)]
pub struct CambiosSolicitud {
    pub titulo: String,
    pub descripcion: String,
    pub categoria: Categoria,
    pub estatus: Estatus,
    pub usuario_solicitante: Option<String>,
}

/// Formato de fecha usado en JSON y CSV (RFC 3339, milisegundos, sufijo Z)
pub fn formato_fecha(fecha: &DateTime<Utc>) -> String {
    fecha.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_fecha<S: Serializer>(fecha: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&formato_fecha(fecha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Solicitud {
        Solicitud {
            id: 7,
            titulo: "Servidor dañado".to_string(),
            descripcion: "El servidor principal no arranca".to_string(),
            categoria: Categoria::Soporte,
            estatus: Estatus::EnProceso,
            usuario_solicitante: "Admin".to_string(),
            fecha_creacion: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["usuarioSolicitante"], "Admin");
        assert_eq!(json["fechaCreacion"], "2024-05-01T10:30:00.000Z");
        assert_eq!(json["estatus"], "En_Proceso");
        assert!(json.get("usuario_solicitante").is_none());
    }

    #[test]
    fn test_field_value() {
        let s = sample();
        assert_eq!(s.field_value("id").as_deref(), Some("7"));
        assert_eq!(s.field_value("categoria").as_deref(), Some("Soporte"));
        assert_eq!(s.field_value("fechaCreacion").as_deref(), Some("2024-05-01T10:30:00.000Z"));
        assert_eq!(s.field_value("password"), None);
    }
}
