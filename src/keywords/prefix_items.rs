//! `prefixItems` (2020-12): an array of schemas checked positionally against
//! the instance's leading elements; `items` covers whatever is left over.
//!
//! Grounded in `jsonschema`'s modern `crates/jsonschema/src/keywords/prefix_items.rs`.
//! That version also builds a `PartialApplication`/annotation payload for
//! 2020-12's "basic" structured output format — out of scope here, since this
//! crate's `Keyword` trait reports only pass/fail plus `ValidationError`s,
//! not evaluated-keyword annotations (see `DESIGN.md`).
use crate::{
    accumulator::ArrayAccumulator,
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
        reason: "`prefixItems` must be an array of schemas".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let accumulator = artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default);
    for (index, item) in items.iter().enumerate() {
        let sub = driver::compile_subtree(item, base_context.descend(index, item))?;
        accumulator.positional.push(Box::new(sub));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::JSONSchema;
    use serde_json::json;

    #[test]
    fn checks_elements_positionally_and_leaves_the_tail_alone() {
        let schema = json!({"prefixItems": [{"type": "string"}, {"type": "integer"}]});
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!(["a", 1, "anything"])));
        assert!(!compiled.is_valid(&json!([1, 1])));
    }
}
