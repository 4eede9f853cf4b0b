//! `unevaluatedItems`: applies to array indices not already covered by
//! `items`/`prefixItems`/`additionalItems`.
//!
//! Local-only counterpart to `unevaluated_properties`: an index counts as
//! evaluated only by a sibling `items`/`prefixItems`/`additionalItems` in the
//! same schema object, not by annotations from `allOf`/`if`/`$ref`/etc. the
//! teacher's modern workspace tracks across the whole schema tree. See
//! `DESIGN.md`.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{CompilationError, ErrorIterator},
    keyword::Keyword,
    paths::InstancePath,
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct UnevaluatedItems<'a> {
    schema: Artifact<'a>,
    /// Indices below this bound are already covered by `items`/`prefixItems`.
    positional_count: usize,
    /// `items` (legacy single-schema form) or `additionalItems` covers every
    /// index at or past `positional_count`, leaving nothing unevaluated.
    all_covered: bool,
}

impl<'a> UnevaluatedItems<'a> {
    fn is_evaluated(&self, index: usize) -> bool {
        self.all_covered || index < self.positional_count
    }
}

impl<'a> Keyword for UnevaluatedItems<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        let Value::Array(array) = instance else {
            return Box::new(std::iter::empty());
        };
        let mut errors = Vec::new();
        for (index, element) in array.iter().enumerate() {
            if self.is_evaluated(index) {
                continue;
            }
            let _guard = instance_path.push(index);
            errors.extend(self.schema.validate(schema, element, instance_path));
        }
        Box::new(errors.into_iter())
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        let Value::Array(array) = instance else { return true };
        array
            .iter()
            .enumerate()
            .all(|(index, element)| self.is_evaluated(index) || self.schema.is_valid(schema, element))
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;

    let supports_prefix_items = artifact.context.draft.supports_prefix_items();
    let (positional_count, all_covered) = if supports_prefix_items {
        let prefix_count = parent.get("prefixItems").and_then(Value::as_array).map_or(0, Vec::len);
        let items_covers_all = parent.contains_key("items");
        (prefix_count, items_covers_all)
    } else {
        match parent.get("items") {
            Some(Value::Array(items)) => (items.len(), parent.contains_key("additionalItems")),
            Some(_) => (0, true),
            None => (0, false),
        }
    };

    artifact.filters.push(Box::new(UnevaluatedItems { schema: sub, positional_count, all_covered }));
    Ok(())
}
