//! `anyOf`: the instance must satisfy at least one listed subschema.
//!
//! Grounded in `jsonschema::keywords::any_of`, without the teacher's
//! `paste!`-generated macro dispatch (not part of this crate's dependency
//! set) — plain iteration over the compiled branches instead.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct AnyOf<'a> {
    branches: Vec<Artifact<'a>>,
    schema_pointer: Pointer,
}

impl<'a> Keyword for AnyOf<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        if self.branches.iter().any(|branch| branch.is_valid(schema, instance)) {
            no_error()
        } else {
            error(ValidationError::new(
                ValidationErrorKind::CombinatorMismatch {
                    combinator: "anyOf",
                    reason: Some("instance matched none of the listed schemas".to_string()),
                },
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            ))
        }
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        self.branches.iter().any(|branch| branch.is_valid(schema, instance))
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
        reason: "`anyOf` must be an array of schemas".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let mut branches = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        branches.push(driver::compile_subtree(item, base_context.descend(index, item))?);
    }
    artifact
        .filters
        .push(Box::new(AnyOf { branches, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location() {
        tests_util::assert_schema_path(
            json!({"anyOf": [{"type": "string"}, {"type": "boolean"}]}),
            json!(1),
            "#/anyOf",
        )
    }
}
