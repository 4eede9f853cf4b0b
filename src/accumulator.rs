//! Single-pass folds over an array's elements or an object's key-value
//! pairs, driving every keyword whose check needs per-element state instead
//! of re-walking the value once per keyword.
//!
//! This realizes `spec.md` §3's `needs_accumulator` / `accumulator_init` /
//! `accumulator_pipeline` triple as concrete Rust: since this crate compiles
//! to an interpreter tree rather than generated source (Design Note (b)),
//! "codegen state" becomes a small struct assembled once at compile time
//! (`ArrayAccumulator`/`ObjectAccumulator`, playing the role of both
//! `accumulator_init` and `accumulator_pipeline` — there is no separate
//! "initial value" step distinct from "construct the struct") and run once
//! per `validate` call, seeding fresh local state every time so compiled
//! validators stay reentrant (`spec.md` §5).
//!
//! Grounded in `jsonschema::keywords::additional_properties`, whose
//! `compile` inspects sibling keywords (`properties`, `patternProperties`)
//! to avoid re-deriving "is this key additional" independently — the same
//! idea generalized here to a single fold covering every per-key/per-element
//! filter at once.
use crate::{
    error::{owned, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::BoxedKeyword,
    paths::InstancePath,
    value_eq,
};
use regex::Regex;
use serde_json::{Map, Value};

/// The per-index contribution of the array filters that need one.
#[derive(Debug, Default)]
pub(crate) struct ArrayAccumulator<'a> {
    /// `items`/`prefixItems`: schema(s) checked positionally, plus the
    /// overflow guard (`additionalItems`/trailing `items`) for indices past
    /// the last positional schema.
    pub(crate) positional: Vec<BoxedKeyword<'a>>,
    pub(crate) overflow: Option<BoxedKeyword<'a>>,
    /// `contains`/`minContains`/`maxContains`.
    pub(crate) contains: Option<ContainsFold<'a>>,
    /// `uniqueItems`.
    pub(crate) unique_items: bool,
}

#[derive(Debug)]
pub(crate) struct ContainsFold<'a> {
    pub(crate) schema: BoxedKeyword<'a>,
    pub(crate) min: u64,
    pub(crate) max: u64,
    pub(crate) schema_pointer: crate::paths::Pointer,
}

impl<'k> ArrayAccumulator<'k> {
    pub(crate) fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.overflow.is_none() && self.contains.is_none() && !self.unique_items
    }

    pub(crate) fn run<'i>(
        &self,
        schema: &'i crate::compilation::JSONSchema,
        array: &'i [Value],
        instance_path: &InstancePath,
    ) -> ErrorIterator<'i> {
        let mut errors = Vec::new();
        let mut seen: Vec<&Value> = Vec::with_capacity(if self.unique_items { array.len() } else { 0 });
        let mut contains_count: u64 = 0;

        for (index, element) in array.iter().enumerate() {
            let _guard = instance_path.push(index);
            if let Some(step) = self.positional.get(index) {
                errors.extend(step.validate(schema, element, instance_path));
            } else if let Some(overflow) = &self.overflow {
                errors.extend(overflow.validate(schema, element, instance_path));
            }
            if let Some(contains) = &self.contains {
                if contains.schema.is_valid(schema, element) {
                    contains_count += 1;
                }
            }
            if self.unique_items {
                if seen.iter().any(|prior| value_eq::eq(prior, element)) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UniqueViolation,
                        instance_path.to_pointer(),
                        instance_path.to_pointer(),
                        owned(element),
                    ));
                }
                seen.push(element);
            }
        }

        if let Some(contains) = &self.contains {
            if contains_count < contains.min || contains_count > contains.max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ContainsUnsatisfied {
                        reason: format!(
                            "expected between {} and {} matching items, found {}",
                            contains.min, contains.max, contains_count
                        ),
                    },
                    contains.schema_pointer.clone(),
                    instance_path.to_pointer(),
                    owned(&Value::Array(array.to_vec())),
                ));
            }
        }

        Box::new(errors.into_iter())
    }
}

/// The per-key contribution of the object filters that need one:
/// `properties`, `patternProperties`, `additionalProperties`,
/// `propertyNames`. `required`/`minProperties`/`maxProperties` check the key
/// set as a whole and stay ordinary `filters`, not part of this fold.
#[derive(Debug, Default)]
pub(crate) struct ObjectAccumulator<'a> {
    pub(crate) property_keywords: std::collections::HashMap<String, BoxedKeyword<'a>>,
    pub(crate) pattern_properties: Vec<(Regex, BoxedKeyword<'a>)>,
    pub(crate) additional_properties: Option<BoxedKeyword<'a>>,
    pub(crate) property_names: Option<BoxedKeyword<'a>>,
}

impl<'k> ObjectAccumulator<'k> {
    pub(crate) fn is_empty(&self) -> bool {
        self.property_keywords.is_empty()
            && self.pattern_properties.is_empty()
            && self.additional_properties.is_none()
            && self.property_names.is_none()
    }

    pub(crate) fn run<'i>(
        &self,
        schema: &'i crate::compilation::JSONSchema,
        object: &'i Map<String, Value>,
        instance_path: &InstancePath,
    ) -> ErrorIterator<'i> {
        let mut errors = Vec::new();
        for (key, value) in object {
            let _guard = instance_path.push(key.as_str());
            if let Some(name_check) = &self.property_names {
                errors.extend(name_check.validate(schema, &Value::String(key.clone()), instance_path));
            }
            let mut matched = false;
            if let Some(keyword) = self.property_keywords.get(key) {
                matched = true;
                errors.extend(keyword.validate(schema, value, instance_path));
            }
            for (pattern, keyword) in &self.pattern_properties {
                if pattern.is_match(key) {
                    matched = true;
                    errors.extend(keyword.validate(schema, value, instance_path));
                }
            }
            if !matched {
                if let Some(additional) = &self.additional_properties {
                    errors.extend(additional.validate(schema, value, instance_path));
                }
            }
        }
        Box::new(errors.into_iter())
    }
}
