//! `multipleOf`: `instance / multiple_of` must be an integer.
//!
//! Grounded in `jsonschema::keywords::multiple_of`, which splits
//! `MultipleOfIntegerValidator`/`MultipleOfFloatValidator` by the schema
//! value's own representation. The integer path's remainder check is
//! correct for float instances too, so this consolidates both into one
//! struct (see `DESIGN.md`).
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct MultipleOf {
    multiple_of: f64,
    schema_pointer: Pointer,
}

fn is_multiple(value: f64, multiple_of: f64) -> bool {
    let remainder = (value / multiple_of).fract();
    remainder.abs() < f64::EPSILON || (remainder.abs() - 1.0).abs() < f64::EPSILON
}

impl Keyword for MultipleOf {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Number(number) = instance {
            let value = number.as_f64().unwrap_or(f64::NAN);
            if !is_multiple(value, self.multiple_of) {
                return error(ValidationError::new(
                    ValidationErrorKind::RangeViolation {
                        reason: format!("{} is not a multiple of {}", number, self.multiple_of),
                    },
                    self.schema_pointer.clone(),
                    instance_path.to_pointer(),
                    owned(instance),
                ));
            }
        }
        no_error()
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        match instance {
            Value::Number(number) => is_multiple(number.as_f64().unwrap_or(f64::NAN), self.multiple_of),
            _ => true,
        }
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let multiple_of = value.as_f64().filter(|value| *value > 0.0).ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`multipleOf` must be a positive number".to_string(),
    })?;
    artifact
        .filters
        .push(Box::new(MultipleOf { multiple_of, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}
