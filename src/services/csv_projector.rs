//! Proyección CSV
//!
//! Serializa solicitudes a texto delimitado por `|`. La primera línea es el
//! encabezado con los nombres de campo; las columnas siguen exactamente el
//! orden recibido. Los nombres de campo se asumen ya validados: un nombre
//! desconocido produce una columna vacía.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::models::catalog::CAMPOS_SOLICITUD;
use crate::models::solicitud::Solicitud;
use crate::utils::errors::{AppError, AppResult};

pub const DELIMITADOR: u8 = b'|';

/// Columnas efectivas: la lista recibida o, si está vacía, el orden por defecto del catálogo
pub fn columnas(campos: &[String]) -> Vec<&str> {
    if campos.is_empty() {
        CAMPOS_SOLICITUD.to_vec()
    } else {
        campos.iter().map(String::as_str).collect()
    }
}

/// Proyecta las solicitudes a CSV. Sólo devuelve texto si la serialización completa tuvo éxito.
pub fn exportar_a_csv(solicitudes: &[Solicitud], campos: &[String]) -> AppResult<String> {
    let columnas = columnas(campos);
    debug!("Campos para exportar: {:?}", columnas);

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITADOR)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&columnas).map_err(export_error)?;

    for solicitud in solicitudes {
        let fila = columnas
            .iter()
            .map(|campo| solicitud.field_value(campo).unwrap_or_default());
        writer.write_record(fila).map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("Error al exportar a CSV. {}", e)))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("Error al exportar a CSV. {}", e)))
}

fn export_error(err: csv::Error) -> AppError {
    AppError::Export(format!("Error al exportar a CSV. {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Categoria, Estatus};
    use chrono::{TimeZone, Utc};
    use csv::ReaderBuilder;

    fn solicitud(id: i32, titulo: &str, descripcion: &str) -> Solicitud {
        Solicitud {
            id,
            titulo: titulo.to_string(),
            descripcion: descripcion.to_string(),
            categoria: Categoria::Compra,
            estatus: Estatus::Pendiente,
            usuario_solicitante: "Antonio".to_string(),
            fecha_creacion: Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap(),
        }
    }

    fn campos(nombres: &[&str]) -> Vec<String> {
        nombres.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encabezado_sigue_orden_solicitado() {
        let csv = exportar_a_csv(&[solicitud(1, "Laptop", "Compra de laptop nueva")], &campos(&["estatus", "titulo"])).unwrap();
        let mut lineas = csv.lines();
        assert_eq!(lineas.next(), Some("estatus|titulo"));
        assert_eq!(lineas.next(), Some("Pendiente|Laptop"));
        assert_eq!(lineas.next(), None);
    }

    #[test]
    fn test_lista_vacia_usa_orden_por_defecto() {
        let datos = vec![solicitud(1, "Laptop", "Compra de laptop nueva")];
        let csv = exportar_a_csv(&datos, &[]).unwrap();
        assert_eq!(
            csv.lines().next(),
            Some("id|titulo|descripcion|categoria|estatus|fechaCreacion|usuarioSolicitante")
        );
        assert_eq!(
            csv.lines().nth(1),
            Some("1|Laptop|Compra de laptop nueva|Compra|Pendiente|2024-03-09T08:00:00.000Z|Antonio")
        );
    }

    #[test]
    fn test_sin_registros_solo_encabezado() {
        let csv = exportar_a_csv(&[], &campos(&["id"])).unwrap();
        assert_eq!(csv, "id\n");
    }

    #[test]
    fn test_campo_desconocido_produce_columna_vacia() {
        let csv = exportar_a_csv(&[solicitud(3, "Silla", "Silla ergonómica")], &campos(&["id", "otro"])).unwrap();
        assert_eq!(csv.lines().nth(1), Some("3|"));
    }

    #[test]
    fn test_ida_y_vuelta_con_caracteres_especiales() {
        let datos = vec![
            solicitud(1, "Tubo | llave", "Incluye \"comillas\", comas\ny saltos"),
            solicitud(2, "Normal", "Descripción normal"),
        ];
        let csv = exportar_a_csv(&datos, &[]).unwrap();

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITADOR)
            .from_reader(csv.as_bytes());
        let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(header, CAMPOS_SOLICITUD);

        let filas: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(filas.len(), datos.len());
        for (fila, original) in filas.iter().zip(&datos) {
            for (valor, campo) in fila.iter().zip(CAMPOS_SOLICITUD) {
                assert_eq!(Some(valor.to_string()), original.field_value(campo));
            }
        }
    }
}
