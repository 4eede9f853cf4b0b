//! The `Keyword` trait: the compiled, runtime form of one schema keyword's
//! contribution to a subtree's validator. Grounded in
//! `jsonschema::validator::Validate`, simplified to a single `validate`/
//! `is_valid` pair (rather than one method per JSON type) since this crate's
//! type dispatch happens once, up front, against `Artifact`'s admissible-type
//! bitmap, rather than being re-derived by every keyword.
use crate::{compilation::JSONSchema, error::ErrorIterator, paths::InstancePath};
use serde_json::Value;
use std::fmt::Debug;

pub trait Keyword: Send + Sync + Debug {
    /// Check `instance` and report every mismatch found under it.
    fn validate<'a>(
        &self,
        schema: &'a JSONSchema,
        instance: &'a Value,
        instance_path: &InstancePath,
    ) -> ErrorIterator<'a>;

    /// Same check as `validate`, but stops at the first mismatch and never
    /// builds an error payload. Used by combinators (`anyOf`, `not`, `if`)
    /// that only need a boolean outcome.
    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool;
}

/// Boxed the same way the teacher boxes `Validate` trait objects, but
/// carrying an explicit lifetime: unlike the teacher's owned-only
/// validators, combinator keywords here (`allOf`, `items`, `properties`, ...)
/// hold compiled sub-`Artifact<'a>`s directly rather than re-resolving them
/// through the registry, so the trait object must be allowed to borrow the
/// schema document for as long as its enclosing `Artifact` does.
pub(crate) type BoxedKeyword<'a> = Box<dyn Keyword + 'a>;
pub(crate) type Keywords<'a> = Vec<BoxedKeyword<'a>>;

/// Run every keyword in `keywords` against `instance`, collecting all errors
/// rather than stopping at the first one (matches the teacher's
/// `flat_map`-over-validators style, and is what lets `required` and
/// `properties` mismatches on the same object both show up in one pass).
pub(crate) fn validate_all<'k, 'i>(
    keywords: &'k Keywords<'k>,
    schema: &'i JSONSchema,
    instance: &'i Value,
    instance_path: &InstancePath,
) -> ErrorIterator<'i> {
    Box::new(
        keywords
            .iter()
            .flat_map(move |keyword| keyword.validate(schema, instance, instance_path))
            .collect::<Vec<_>>()
            .into_iter(),
    )
}

pub(crate) fn is_valid_all<'k>(keywords: &'k Keywords<'k>, schema: &JSONSchema, instance: &Value) -> bool {
    keywords.iter().all(|keyword| keyword.is_valid(schema, instance))
}
