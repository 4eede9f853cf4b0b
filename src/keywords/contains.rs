//! `contains`, with its `minContains`/`maxContains` siblings: at least
//! `minContains` and at most `maxContains` elements must match the `contains`
//! schema (defaults `1`/unbounded, matching drafts that lack the two
//! sibling keywords entirely).
//!
//! Grounded in `jsonschema::keywords::contains::ContainsValidator`, extended
//! with the `minContains`/`maxContains` count bounds `spec.md` adds.
use crate::{
    accumulator::{ArrayAccumulator, ContainsFold},
    driver::{self, Artifact},
    error::CompilationError,
};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let schema_pointer = artifact.context.pointer.join(keyword);
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    let min = parent.get("minContains").and_then(Value::as_u64).unwrap_or(1);
    let max = parent.get("maxContains").and_then(Value::as_u64).unwrap_or(u64::MAX);
    artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default).contains =
        Some(ContainsFold { schema: Box::new(sub), min, max, schema_pointer });
    Ok(())
}
