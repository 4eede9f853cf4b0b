//! `const`: the instance must equal a single fixed value.
//!
//! Grounded in `jsonschema::keywords::const_`; see `enum_` for the
//! `value_eq::eq` comparison rationale.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
    value_eq,
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Const {
    expected: Value,
    schema_pointer: Pointer,
}

impl Keyword for Const {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if !value_eq::eq(&self.expected, instance) {
            return error(ValidationError::new(
                ValidationErrorKind::ConstMismatch { expected: self.expected.clone() },
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            ));
        }
        no_error()
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        value_eq::eq(&self.expected, instance)
    }
}

pub(crate) fn parse<'a>(
    _keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    artifact.filters.push(Box::new(Const {
        expected: value.clone(),
        schema_pointer: artifact.context.pointer.join("const"),
    }));
    Ok(())
}
