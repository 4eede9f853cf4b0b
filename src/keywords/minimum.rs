//! `minimum`: `instance >= limit` for numeric instances.
//!
//! Grounded in `jsonschema::keywords::minimum`, consolidated across numeric
//! representations via `keywords::numeric` (see `DESIGN.md`).
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    keywords::numeric::{num_ge, Limit},
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Minimum {
    limit: Limit,
    schema_pointer: Pointer,
}

impl Keyword for Minimum {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Number(number) = instance {
            if !num_ge(number, self.limit) {
                return error(ValidationError::new(
                    ValidationErrorKind::RangeViolation {
                        reason: format!("{} is less than the minimum of {}", number, self.limit),
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
            Value::Number(number) => num_ge(number, self.limit),
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
    let number = match value {
        Value::Number(number) => number,
        _ => {
            return Err(CompilationError::SchemaError {
                schema_pointer: artifact.context.pointer.join(keyword),
                reason: format!("`{}` must be a number", keyword),
            })
        }
    };
    artifact.filters.push(Box::new(Minimum {
        limit: Limit::from_number(number),
        schema_pointer: artifact.context.pointer.join(keyword),
    }));
    Ok(())
}
