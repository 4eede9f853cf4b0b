//! Draft 4's `maximum`; see `legacy::minimum_draft4` for the sibling-keyword
//! delegation this mirrors.
//!
//! Grounded in `jsonschema::keywords::legacy::maximum_draft_4`.
use crate::{driver::Artifact, error::CompilationError, keywords};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    if matches!(parent.get("exclusiveMaximum"), Some(Value::Bool(true))) {
        keywords::exclusive_maximum::parse(keyword, value, parent, artifact)
    } else {
        keywords::maximum::parse(keyword, value, parent, artifact)
    }
}

#[cfg(test)]
mod tests {
    use crate::JSONSchema;
    use serde_json::json;

    #[test]
    fn boolean_flag_switches_to_strict_comparison() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "maximum": 10,
            "exclusiveMaximum": true
        });
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(!compiled.is_valid(&json!(10)));
    }
}
