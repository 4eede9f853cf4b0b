//! `allOf`: the instance must satisfy every listed subschema.
//!
//! Grounded in `jsonschema::keywords::all_of`. Since `Artifact` itself
//! implements `Keyword` (driver.rs), and `Artifact::filters` is already an
//! AND of its members, each branch is pushed as an ordinary filter rather
//! than wrapped in a combinator struct — "all of N schemas hold" is exactly
//! what a flat filter list already means.
use crate::{
    driver::{self, Artifact},
    error::CompilationError,
};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let items = value.as_array().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`allOf` must be an array of schemas".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    for (index, item) in items.iter().enumerate() {
        let context = base_context.descend(index, item);
        let sub = driver::compile_subtree(item, context)?;
        artifact.filters.push(Box::new(sub));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn every_branch_must_hold() {
        let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 0}]});
        tests_util::is_valid(schema.clone(), json!(3));
        tests_util::is_not_valid(schema, json!(-3));
    }

    #[test]
    fn location_points_at_the_failing_branch() {
        tests_util::assert_schema_path(
            json!({"allOf": [{"type": "integer"}, {"maximum": 5}]}),
            json!(6),
            "#/allOf/1/maximum",
        )
    }
}
