//! Utilidades de validación
//!
//! Reglas declarativas por campo y el ejecutor genérico que las evalúa.
//! El ejecutor recorre todos los campos y todas las reglas de cada campo y
//! acumula todas las violaciones. Las reglas que dependen del tipo no se
//! evalúan sobre un valor de otro tipo: un número en un campo de texto sólo
//! produce la violación de `IsString`.

use serde_json::{Map, Value};

use super::errors::{AppError, FieldError};

/// Descriptor de una regla de validación
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Presente, no nulo y no vacío
    Required,
    /// Cadena de texto
    IsString,
    /// Longitud mínima en caracteres
    MinLength(usize),
    /// Entero dentro de `[min, max]`. Acepta números o cadenas numéricas.
    Integer { min: i64, max: i64 },
    /// Miembro de un conjunto cerrado
    OneOf(&'static [&'static str]),
    /// Lista cuyos elementos pertenecen a un conjunto cerrado; la lista vacía es válida
    ListOf(&'static [&'static str]),
}

/// Reglas de un campo, con el mensaje asociado a cada una
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub optional: bool,
    checks: Vec<(Rule, String)>,
}

impl FieldRules {
    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            optional: false,
            checks: vec![(Rule::Required, message.into())],
        }
    }

    pub fn optional(field: &'static str) -> Self {
        Self {
            field,
            optional: true,
            checks: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.checks.push((rule, message.into()));
        self
    }

    pub fn string(self, message: impl Into<String>) -> Self {
        self.rule(Rule::IsString, message)
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MinLength(min), message)
    }

    pub fn integer(self, min: i64, max: i64, message: impl Into<String>) -> Self {
        self.rule(Rule::Integer { min, max }, message)
    }

    pub fn one_of(self, allowed: &'static [&'static str], message: impl Into<String>) -> Self {
        self.rule(Rule::OneOf(allowed), message)
    }

    pub fn list_of(self, allowed: &'static [&'static str], message: impl Into<String>) -> Self {
        self.rule(Rule::ListOf(allowed), message)
    }

    fn evaluate(&self, value: Option<&Value>, errors: &mut Vec<FieldError>) {
        let present = matches!(value, Some(v) if !v.is_null());
        if self.optional && !present {
            return;
        }

        for (rule, message) in &self.checks {
            if let Some(message) = check(rule, message, value) {
                errors.push(FieldError::new(self.field, message));
            }
        }
    }
}

/// Evalúa una regla; devuelve el mensaje de error si no se cumple
fn check(rule: &Rule, message: &str, value: Option<&Value>) -> Option<String> {
    let ok = match (rule, value) {
        (Rule::Required, Some(Value::String(s))) => !s.is_empty(),
        (Rule::Required, Some(v)) => !v.is_null(),
        (Rule::Required, None) => false,

        // La ausencia ya la reporta `Required`
        (Rule::IsString, None | Some(Value::Null)) => true,
        (Rule::IsString, Some(v)) => v.is_string(),

        // Ausente cuenta como cadena vacía; otro tipo ya lo reporta `IsString`
        (Rule::MinLength(min), None | Some(Value::Null)) => *min == 0,
        (Rule::MinLength(min), Some(Value::String(s))) => s.chars().count() >= *min,
        (Rule::MinLength(_), Some(_)) => true,

        (Rule::Integer { min, max }, Some(v)) => {
            as_integer(v).map_or(false, |n| (*min..=*max).contains(&n))
        }

        (Rule::OneOf(allowed), Some(Value::String(s))) => allowed.contains(&s.as_str()),

        (Rule::ListOf(allowed), Some(Value::Array(items))) => {
            let invalid: Vec<String> = items
                .iter()
                .filter(|item| !item.as_str().map_or(false, |s| allowed.contains(&s)))
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            if !invalid.is_empty() {
                return Some(format!("{}: {}", message, invalid.join(", ")));
            }
            true
        }

        _ => false,
    };

    if ok {
        None
    } else {
        Some(message.to_string())
    }
}

/// Entero desde un número JSON o una cadena de dígitos con signo opcional
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

/// Ejecuta todas las reglas sobre la entrada y acumula todas las violaciones
pub fn run_rules(rules: &[FieldRules], input: &Map<String, Value>) -> Result<(), AppError> {
    let mut errors = Vec::new();
    for field_rules in rules {
        field_rules.evaluate(input.get(field_rules.field), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
