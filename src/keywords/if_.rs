//! `if`/`then`/`else`: conditional application of a subschema, based on
//! whether the instance satisfies `if`.
//!
//! Grounded in `jsonschema::keywords::if_`, which dispatches at compile time
//! on which of `then`/`else` are present alongside `if` in the parent
//! object (`IfThenValidator`/`IfElseValidator`/`IfThenElseValidator`). Here
//! that three-way split collapses into one struct with two `Option` fields,
//! since the runtime behavior differs only in which branch is `None`. A
//! bare `if` with neither sibling compiles to no filter at all, matching the
//! spec's "no effect" rule for that case. `then`/`else` are not entries in
//! `Draft::get_parser`'s table; they're read directly from `parent` here.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{no_error, CompilationError, ErrorIterator},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct If<'a> {
    condition: Artifact<'a>,
    then_branch: Option<Artifact<'a>>,
    else_branch: Option<Artifact<'a>>,
    #[allow(dead_code)]
    schema_pointer: Pointer,
}

impl<'a> Keyword for If<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        if self.condition.is_valid(schema, instance) {
            match &self.then_branch {
                Some(branch) => branch.validate(schema, instance, instance_path),
                None => no_error(),
            }
        } else {
            match &self.else_branch {
                Some(branch) => branch.validate(schema, instance, instance_path),
                None => no_error(),
            }
        }
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        if self.condition.is_valid(schema, instance) {
            self.then_branch.as_ref().map_or(true, |branch| branch.is_valid(schema, instance))
        } else {
            self.else_branch.as_ref().map_or(true, |branch| branch.is_valid(schema, instance))
        }
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let then_branch = match parent.get("then") {
        Some(then_value) => Some(driver::compile_subtree(then_value, artifact.context.descend("then", then_value))?),
        None => None,
    };
    let else_branch = match parent.get("else") {
        Some(else_value) => Some(driver::compile_subtree(else_value, artifact.context.descend("else", else_value))?),
        None => None,
    };
    if then_branch.is_none() && else_branch.is_none() {
        return Ok(());
    }
    let condition = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    artifact.filters.push(Box::new(If {
        condition,
        then_branch,
        else_branch,
        schema_pointer: artifact.context.pointer.join(keyword),
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bare_if_with_no_then_or_else_has_no_effect() {
        tests_util::is_valid(json!({"if": {"type": "string"}}), json!(1));
    }

    #[test]
    fn else_only_applies_when_the_condition_fails() {
        let schema = json!({"if": {"type": "integer"}, "else": {"minLength": 3}});
        tests_util::is_valid(schema.clone(), json!(1));
        tests_util::is_valid(schema.clone(), json!("abc"));
        tests_util::is_not_valid(schema, json!("a"));
    }

    #[test]
    fn has_no_effect_under_draft_06() {
        use crate::JSONSchema;
        let schema = json!({
            "$schema": "http://json-schema.org/draft-06/schema#",
            "if": {"type": "integer"},
            "else": {"minLength": 3}
        });
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!("a")));
    }
}
