//! `uniqueItems`: when `true`, no two elements may be structurally equal.
//!
//! Grounded in `jsonschema::keywords::unique_items`, which hashes each
//! element via a `DefaultHasher`-backed `HashSet` for O(n) detection. This
//! crate instead scans linearly with `value_eq::eq` inside the array
//! accumulator (`accumulator::ArrayAccumulator::run`), trading that
//! asymptotic edge for the recursive numeric equality `spec.md` calls for
//! (see `DESIGN.md`).
use crate::{accumulator::ArrayAccumulator, driver::Artifact, error::CompilationError};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let enabled = value.as_bool().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`uniqueItems` must be a boolean".to_string(),
    })?;
    if enabled {
        artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default).unique_items = true;
    }
    Ok(())
}
