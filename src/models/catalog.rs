//! Catálogo de campos
//!
//! Fuente única de los tres conjuntos cerrados del dominio: categorías,
//! estatus y campos exportables de una solicitud. Validadores, filtros y
//! exportación consultan este módulo en lugar de repetir los valores.

use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Categorías válidas, en orden de presentación
pub const CATEGORIAS_VALIDAS: [&str; 3] = ["Permiso", "Compra", "Soporte"];

/// Estatus válidos, en orden de presentación
pub const ESTATUS_VALIDOS: [&str; 3] = ["Pendiente", "En_Proceso", "Finalizada"];

/// Campos de una solicitud; también es el orden de columnas por defecto del CSV
pub const CAMPOS_SOLICITUD: [&str; 7] = [
    "id",
    "titulo",
    "descripcion",
    "categoria",
    "estatus",
    "fechaCreacion",
    "usuarioSolicitante",
];

/// Mensaje de error para una categoría fuera del catálogo
pub fn mensaje_categoria_invalida() -> String {
    format!(
        "La categoría debe ser una de las siguientes: {}",
        CATEGORIAS_VALIDAS.join(", ")
    )
}

/// Mensaje de error para un estatus fuera del catálogo
pub fn mensaje_estatus_invalido() -> String {
    format!(
        "El estatus debe ser uno de los siguientes: {}",
        ESTATUS_VALIDOS.join(", ")
    )
}

/// Categoría de la solicitud - mapea al ENUM categoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "categoria")]
pub enum Categoria {
    Permiso,
    Compra,
    Soporte,
}

impl Categoria {
    pub const ALL: [Categoria; 3] = [Categoria::Permiso, Categoria::Compra, Categoria::Soporte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Permiso => CATEGORIAS_VALIDAS[0],
            Categoria::Compra => CATEGORIAS_VALIDAS[1],
            Categoria::Soporte => CATEGORIAS_VALIDAS[2],
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Estatus de la solicitud - mapea al ENUM estatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "estatus")]
pub enum Estatus {
    Pendiente,
    #[serde(rename = "En_Proceso")]
    #[sqlx(rename = "En_Proceso")]
    EnProceso,
    Finalizada,
}

impl Estatus {
    pub const ALL: [Estatus; 3] = [Estatus::Pendiente, Estatus::EnProceso, Estatus::Finalizada];

    pub fn as_str(&self) -> &'static str {
        match self {
            Estatus::Pendiente => ESTATUS_VALIDOS[0],
            Estatus::EnProceso => ESTATUS_VALIDOS[1],
            Estatus::Finalizada => ESTATUS_VALIDOS[2],
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_follow_catalog() {
        let categorias: Vec<&str> = Categoria::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(categorias, CATEGORIAS_VALIDAS);

        let estatus: Vec<&str> = Estatus::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(estatus, ESTATUS_VALIDOS);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Categoria::parse("Soporte"), Some(Categoria::Soporte));
        assert_eq!(Categoria::parse("soporte"), None);
        assert_eq!(Estatus::parse("En_Proceso"), Some(Estatus::EnProceso));
        assert_eq!(Estatus::parse("EnProceso"), None);
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        assert_eq!(serde_json::to_string(&Estatus::EnProceso).unwrap(), "\"En_Proceso\"");
        let c: Categoria = serde_json::from_str("\"Compra\"").unwrap();
        assert_eq!(c, Categoria::Compra);
    }

    #[test]
    fn test_mensajes() {
        assert_eq!(
            mensaje_categoria_invalida(),
            "La categoría debe ser una de las siguientes: Permiso, Compra, Soporte"
        );
    }
}
