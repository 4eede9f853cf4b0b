//! `not`: the instance must fail the listed subschema.
//!
//! Grounded in `jsonschema::keywords::not`.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Not<'a> {
    negated: Artifact<'a>,
    schema_pointer: Pointer,
}

impl<'a> Keyword for Not<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        if self.negated.is_valid(schema, instance) {
            error(ValidationError::new(
                ValidationErrorKind::CombinatorMismatch {
                    combinator: "not",
                    reason: Some("instance matched the negated schema".to_string()),
                },
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            ))
        } else {
            no_error()
        }
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        !self.negated.is_valid(schema, instance)
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let negated = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    artifact.filters.push(Box::new(Not { negated, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}
