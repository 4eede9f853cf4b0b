//! `exclusiveMinimum` (draft 6+ numeric form): `instance > limit`.
//!
//! Grounded in `jsonschema::keywords::exclusive_minimum`, consolidated via
//! `keywords::numeric` (see `DESIGN.md`). Draft 4's boolean
//! `exclusiveMinimum` is handled separately by `keywords::legacy::minimum_draft4`.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    keywords::numeric::{num_gt, Limit},
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct ExclusiveMinimum {
    limit: Limit,
    schema_pointer: Pointer,
}

impl Keyword for ExclusiveMinimum {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Number(number) = instance {
            if !num_gt(number, self.limit) {
                return error(ValidationError::new(
                    ValidationErrorKind::RangeViolation {
                        reason: format!("{} is not strictly greater than {}", number, self.limit),
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
            Value::Number(number) => num_gt(number, self.limit),
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
    artifact.filters.push(Box::new(ExclusiveMinimum {
        limit: Limit::from_number(number),
        schema_pointer: artifact.context.pointer.join(keyword),
    }));
    Ok(())
}
