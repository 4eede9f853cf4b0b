//! `unevaluatedProperties`: applies to object keys not already covered by
//! `properties`, `patternProperties`, or `additionalProperties`.
//!
//! The teacher's modern workspace (`crates/jsonschema/src/keywords/unevaluated_properties.rs`)
//! tracks "evaluated" keys across the whole schema tree — through `allOf`,
//! `anyOf`, `oneOf`, `if`/`then`/`else`, `$ref` — via an annotation-collecting
//! `Keyword` output this crate's `Keyword` trait has no equivalent for (it
//! only reports pass/fail). This implementation is local-only: it considers a
//! key evaluated only when a sibling `properties`/`patternProperties`/
//! `additionalProperties` in the *same* schema object covers it, not when a
//! branch of `allOf`/`$ref`/etc. does. See `DESIGN.md`.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{CompilationError, ErrorIterator},
    keyword::Keyword,
    paths::InstancePath,
};
use regex::Regex;
use serde_json::{Map, Value};

use super::pattern::convert_regex;

#[derive(Debug)]
struct UnevaluatedProperties<'a> {
    schema: Artifact<'a>,
    declared: Vec<String>,
    patterns: Vec<Regex>,
    additional_present: bool,
}

impl<'a> UnevaluatedProperties<'a> {
    fn is_evaluated(&self, key: &str) -> bool {
        self.additional_present || self.declared.iter().any(|name| name == key) || self.patterns.iter().any(|re| re.is_match(key))
    }
}

impl<'a> Keyword for UnevaluatedProperties<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        let Value::Object(object) = instance else {
            return Box::new(std::iter::empty());
        };
        let mut errors = Vec::new();
        for (key, value) in object {
            if self.is_evaluated(key) {
                continue;
            }
            let _guard = instance_path.push(key.as_str());
            errors.extend(self.schema.validate(schema, value, instance_path));
        }
        Box::new(errors.into_iter())
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        let Value::Object(object) = instance else { return true };
        object
            .iter()
            .all(|(key, value)| self.is_evaluated(key) || self.schema.is_valid(schema, value))
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;

    let declared = parent
        .get("properties")
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();

    let mut patterns = Vec::new();
    if let Some(object) = parent.get("patternProperties").and_then(Value::as_object) {
        for raw_pattern in object.keys() {
            let regex = Regex::new(&convert_regex(raw_pattern)).map_err(|error| CompilationError::InvalidRegex {
                pattern: raw_pattern.clone(),
                reason: error.to_string(),
            })?;
            patterns.push(regex);
        }
    }

    let additional_present = parent.contains_key("additionalProperties");

    artifact.filters.push(Box::new(UnevaluatedProperties { schema: sub, declared, patterns, additional_present }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn sibling_additional_properties_suppresses_it() {
        let schema = json!({
            "properties": {"a": {}},
            "additionalProperties": true,
            "unevaluatedProperties": false
        });
        tests_util::is_valid(schema, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn pattern_properties_cover_matching_keys() {
        let schema = json!({
            "patternProperties": {"^S_": {}},
            "unevaluatedProperties": false
        });
        tests_util::is_valid(schema.clone(), json!({"S_x": 1}));
        tests_util::is_not_valid(schema, json!({"other": 1}));
    }
}
