//! Validadores de solicitudes
//!
//! Un conjunto de reglas por operación. Cada `validar_*` ejecuta sus reglas,
//! corta con todas las violaciones si las hay y, si no, devuelve la entrada
//! ya tipada para el controlador.

use serde_json::{Map, Value};

use crate::dto::solicitud_dto::{ExportarQuery, ListarQuery};
use crate::models::catalog::{
    mensaje_categoria_invalida, mensaje_estatus_invalido, Categoria, Estatus, CAMPOS_SOLICITUD,
    CATEGORIAS_VALIDAS, ESTATUS_VALIDOS,
};
use crate::models::solicitud::{CambiosSolicitud, NuevaSolicitud};
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::{run_rules, FieldRules, Rule};

const MSG_ID_ENTERO: &str = "El ID de la solicitud debe ser un número entero";
const MSG_ID_POSITIVO: &str = "El ID de la solicitud debe ser un número entero y mayor a 0";

// Rango de la columna SERIAL
const ID_MIN: i64 = i32::MIN as i64;
const ID_MAX: i64 = i32::MAX as i64;

fn regla_titulo() -> FieldRules {
    FieldRules::required("titulo", "El título es obligatorio")
        .string("El título debe ser una cadena de texto")
        .min_length(3, "El título debe tener al menos 3 caracteres")
}

fn regla_descripcion() -> FieldRules {
    FieldRules::required("descripcion", "La descripción es obligatoria")
        .string("La descripción debe ser una cadena de texto")
        .min_length(10, "La descripción debe tener al menos 10 caracteres")
}

fn regla_categoria(obligatoria: bool) -> FieldRules {
    let base = if obligatoria {
        FieldRules::required("categoria", "La categoría es obligatoria")
    } else {
        FieldRules::optional("categoria")
    };
    base.one_of(&CATEGORIAS_VALIDAS, mensaje_categoria_invalida())
}

fn regla_estatus(obligatorio: bool) -> FieldRules {
    let base = if obligatorio {
        FieldRules::required("estatus", "El estatus es obligatorio")
    } else {
        FieldRules::optional("estatus")
    };
    base.one_of(&ESTATUS_VALIDOS, mensaje_estatus_invalido())
}

fn regla_usuario_solicitante(obligatorio: bool) -> FieldRules {
    let base = if obligatorio {
        FieldRules::required("usuarioSolicitante", "El usuario solicitante es obligatorio")
    } else {
        FieldRules::optional("usuarioSolicitante")
            .rule(Rule::Required, "El usuario solicitante es obligatorio")
    };
    base.string("El usuario solicitante debe ser una cadena de texto")
        .min_length(3, "El usuario solicitante debe tener al menos 3 caracteres")
}

pub fn reglas_crear() -> Vec<FieldRules> {
    vec![
        regla_titulo(),
        regla_descripcion(),
        regla_categoria(true),
        regla_estatus(true),
        regla_usuario_solicitante(true),
    ]
}

pub fn reglas_actualizar() -> Vec<FieldRules> {
    vec![
        FieldRules::required("id", MSG_ID_ENTERO).integer(ID_MIN, ID_MAX, MSG_ID_ENTERO),
        regla_titulo(),
        regla_descripcion(),
        regla_categoria(true),
        regla_estatus(true),
        regla_usuario_solicitante(false),
    ]
}

pub fn reglas_obtener() -> Vec<FieldRules> {
    vec![FieldRules::required("id", MSG_ID_POSITIVO).integer(1, ID_MAX, MSG_ID_POSITIVO)]
}

/// Mismo rango que al obtener, con el mensaje propio de la eliminación
pub fn reglas_eliminar() -> Vec<FieldRules> {
    vec![FieldRules::required("id", MSG_ID_ENTERO).integer(1, ID_MAX, MSG_ID_ENTERO)]
}

pub fn reglas_listar() -> Vec<FieldRules> {
    vec![regla_categoria(false), regla_estatus(false)]
}

pub fn reglas_exportar() -> Vec<FieldRules> {
    vec![
        regla_categoria(false),
        regla_estatus(false),
        FieldRules::optional("camposLista")
            .list_of(&CAMPOS_SOLICITUD, "Los siguientes campos no son válidos"),
    ]
}

fn body_map(body: &Value) -> Map<String, Value> {
    body.as_object().cloned().unwrap_or_default()
}

fn texto(input: &Map<String, Value>, field: &str) -> AppResult<String> {
    input
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Internal(format!("campo '{}' ausente tras validar", field)))
}

fn categoria(input: &Map<String, Value>) -> AppResult<Categoria> {
    let raw = texto(input, "categoria")?;
    Categoria::parse(&raw).ok_or_else(|| validation_error("categoria", mensaje_categoria_invalida()))
}

fn estatus(input: &Map<String, Value>) -> AppResult<Estatus> {
    let raw = texto(input, "estatus")?;
    Estatus::parse(&raw).ok_or_else(|| validation_error("estatus", mensaje_estatus_invalido()))
}

/// Sólo se llama con un id que ya pasó la regla de rango
fn parse_id(raw: &str, message: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|_| validation_error("id", message))
}

/// Valida el cuerpo de `POST /solicitudes`
pub fn validar_crear(body: &Value) -> AppResult<NuevaSolicitud> {
    let input = body_map(body);
    run_rules(&reglas_crear(), &input)?;

    Ok(NuevaSolicitud {
        titulo: texto(&input, "titulo")?,
        descripcion: texto(&input, "descripcion")?,
        categoria: categoria(&input)?,
        estatus: estatus(&input)?,
        usuario_solicitante: texto(&input, "usuarioSolicitante")?,
    })
}

/// Valida `PUT /solicitudes/:id`; el id de la ruta prevalece sobre cualquier `id` del cuerpo
pub fn validar_actualizar(id: &str, body: &Value) -> AppResult<(i32, CambiosSolicitud)> {
    let mut input = body_map(body);
    input.insert("id".to_string(), Value::String(id.to_string()));
    run_rules(&reglas_actualizar(), &input)?;

    let usuario_solicitante = match input.get("usuarioSolicitante") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    let cambios = CambiosSolicitud {
        titulo: texto(&input, "titulo")?,
        descripcion: texto(&input, "descripcion")?,
        categoria: categoria(&input)?,
        estatus: estatus(&input)?,
        usuario_solicitante,
    };
    Ok((parse_id(id, MSG_ID_ENTERO)?, cambios))
}

fn validar_id(id: &str, reglas: &[FieldRules], message: &str) -> AppResult<i32> {
    let mut input = Map::new();
    input.insert("id".to_string(), Value::String(id.to_string()));
    run_rules(reglas, &input)?;
    parse_id(id, message)
}

/// Valida el id de `GET /solicitudes/:id`
pub fn validar_obtener(id: &str) -> AppResult<i32> {
    validar_id(id, &reglas_obtener(), MSG_ID_POSITIVO)
}

/// Valida el id de `DELETE /solicitudes/:id`
pub fn validar_eliminar(id: &str) -> AppResult<i32> {
    validar_id(id, &reglas_eliminar(), MSG_ID_ENTERO)
}

pub fn validar_listar(query: &ListarQuery) -> AppResult<()> {
    run_rules(&reglas_listar(), &query.to_input())
}

/// Valida la exportación y devuelve la lista de campos solicitada (posiblemente vacía)
pub fn validar_exportar(query: &ExportarQuery) -> AppResult<Vec<String>> {
    run_rules(&reglas_exportar(), &query.to_input())?;
    Ok(query.campos())
}
