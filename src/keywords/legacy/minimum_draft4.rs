//! Draft 4's `minimum`, where exclusivity is a sibling boolean keyword
//! (`exclusiveMinimum`) rather than `minimum`/`exclusiveMinimum` each taking
//! their own number.
//!
//! Grounded in `jsonschema::keywords::legacy::minimum_draft_4`: inspect the
//! sibling `exclusiveMinimum` in the parent object and delegate to whichever
//! of `exclusive_minimum`/`minimum` it selects.
use crate::{driver::Artifact, error::CompilationError, keywords};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    if matches!(parent.get("exclusiveMinimum"), Some(Value::Bool(true))) {
        keywords::exclusive_minimum::parse(keyword, value, parent, artifact)
    } else {
        keywords::minimum::parse(keyword, value, parent, artifact)
    }
}
