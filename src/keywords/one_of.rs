//! `oneOf`: the instance must satisfy exactly one listed subschema.
//!
//! Grounded in `jsonschema::keywords::one_of`, without the teacher's
//! `paste!`-generated macro dispatch — plain iteration and counting instead.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct OneOf<'a> {
    branches: Vec<Artifact<'a>>,
    schema_pointer: Pointer,
}

impl<'a> OneOf<'a> {
    fn matches(&self, schema: &JSONSchema, instance: &Value) -> usize {
        self.branches.iter().filter(|branch| branch.is_valid(schema, instance)).count()
    }
}

impl<'a> Keyword for OneOf<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        let matches = self.matches(schema, instance);
        if matches == 1 {
            no_error()
        } else {
            let reason = if matches == 0 {
                "instance matched none of the listed schemas".to_string()
            } else {
                format!("instance matched {} of the listed schemas, expected exactly one", matches)
            };
            error(ValidationError::new(
                ValidationErrorKind::CombinatorMismatch { combinator: "oneOf", reason: Some(reason) },
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            ))
        }
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        self.matches(schema, instance) == 1
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let items = value.as_array().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`oneOf` must be an array of schemas".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let mut branches = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        branches.push(driver::compile_subtree(item, base_context.descend(index, item))?);
    }
    artifact
        .filters
        .push(Box::new(OneOf { branches, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location() {
        tests_util::assert_schema_path(
            json!({"oneOf": [{"type": "integer"}, {"minimum": 0}]}),
            json!(5),
            "#/oneOf",
        )
    }
}
