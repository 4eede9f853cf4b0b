//! The validator driver: walks one schema node's keys, offers each to its
//! draft's keyword parser, and assembles an `Artifact` (`spec.md` §4.6).
//! Also the type dispatcher (§4.3): derives the admissible primitive-type
//! set a schema node declares, which becomes the artifact's primary guard.
//!
//! Grounded in `jsonschema::compilation::compile_validators` for the
//! keyword-iteration/dispatch shape, and in `jsonschema::primitive_type`
//! for the admissible-type derivation.
use crate::{
    accumulator::{ArrayAccumulator, ObjectAccumulator},
    compilation::JSONSchema,
    context::CompilationContext,
    error::{error, owned, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::{is_valid_all, validate_all, Keyword, Keywords},
    paths::InstancePath,
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
    error::CompilationError,
};
use serde_json::{Map, Value};

/// Per-subtree compilation state (`spec.md` §3's `Artifact`). `filters`
/// holds both the combining keywords (`enum`, `allOf`, `$ref`, ...) and the
/// type-bound ones (`minLength`, `minimum`, ...) — each type-bound keyword
/// guards its own applicability against the runtime instance's type, the
/// same way `jsonschema::keywords::format` validators no-op on a non-string
/// instance, so a single flat list suffices instead of one per type.
///
/// `needs_accumulator`/`needs_array_in_accumulator`/`accumulator_init`/
/// `accumulator_pipeline` (as named in `spec.md` §3) are realized here as
/// `array_accumulator`/`object_accumulator`: an interpreter tree has no
/// separate "emit initial value" step distinct from "run the per-element
/// callback", so both collapse into one struct built once at compile time
/// (see `accumulator` module doc). `needs_accumulator()`/
/// `needs_array_in_accumulator()` below are derived rather than stored,
/// which keeps invariant 4 (`needs_accumulator = false ⇒ empty pipeline`)
/// true by construction.
#[derive(Debug)]
pub(crate) struct Artifact<'a> {
    pub(crate) context: CompilationContext<'a>,
    admissible: PrimitiveTypesBitMap,
    pub(crate) filters: Keywords<'a>,
    pub(crate) array_accumulator: Option<ArrayAccumulator<'a>>,
    pub(crate) object_accumulator: Option<ObjectAccumulator<'a>>,
}

impl<'a> Artifact<'a> {
    fn empty(context: CompilationContext<'a>, admissible: PrimitiveTypesBitMap) -> Self {
        Artifact { context, admissible, filters: Vec::new(), array_accumulator: None, object_accumulator: None }
    }

    #[must_use]
    pub(crate) fn needs_accumulator(&self) -> bool {
        self.array_accumulator.is_some() || self.object_accumulator.is_some()
    }

    #[must_use]
    pub(crate) fn needs_array_in_accumulator(&self) -> bool {
        self.array_accumulator.is_some()
    }

    /// The type-guarded primary clause plus the always-present catch-all
    /// `/type` clause (`spec.md` §4.6).
    pub(crate) fn validate<'i>(
        &self,
        schema: &'i JSONSchema,
        instance: &'i Value,
        instance_path: &InstancePath,
    ) -> ErrorIterator<'i> {
        if !self.admissible.admits(instance) {
            return error(ValidationError::new(
                ValidationErrorKind::TypeMismatch { expected: self.admissible.to_string() },
                self.context.pointer.join("type"),
                instance_path.to_pointer(),
                owned(instance),
            ));
        }
        let mut errors: Vec<ValidationError> =
            validate_all(&self.filters, schema, instance, instance_path).collect();
        match instance {
            Value::Array(items) => {
                if let Some(accumulator) = &self.array_accumulator {
                    errors.extend(accumulator.run(schema, items, instance_path));
                }
            }
            Value::Object(object) => {
                if let Some(accumulator) = &self.object_accumulator {
                    errors.extend(accumulator.run(schema, object, instance_path));
                }
            }
            _ => {}
        }
        Box::new(errors.into_iter())
    }

    pub(crate) fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        if !self.admissible.admits(instance) {
            return false;
        }
        if !is_valid_all(&self.filters, schema, instance) {
            return false;
        }
        let scratch = InstancePath::new();
        match instance {
            Value::Array(items) => self
                .array_accumulator
                .as_ref()
                .map_or(true, |accumulator| accumulator.run(schema, items, &scratch).next().is_none()),
            Value::Object(object) => self
                .object_accumulator
                .as_ref()
                .map_or(true, |accumulator| accumulator.run(schema, object, &scratch).next().is_none()),
            _ => true,
        }
    }
}

/// Lets a compiled sub-schema (`allOf` branch, `items` member, `$ref`
/// target, ...) be stored directly as a `BoxedKeyword`, so combinators don't
/// need a separate wrapper type for "a schema I compiled inline".
impl<'a> Keyword for Artifact<'a> {
    fn validate<'i>(
        &self,
        schema: &'i JSONSchema,
        instance: &'i Value,
        instance_path: &InstancePath,
    ) -> ErrorIterator<'i> {
        Artifact::validate(self, schema, instance, instance_path)
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        Artifact::is_valid(self, schema, instance)
    }
}

/// Given a schema node's `type` value, the admissible primitive-type set
/// (`spec.md` §4.3). Absent `type` admits every primitive.
#[must_use]
pub(crate) fn derive_admissible_types(object: &Map<String, Value>) -> PrimitiveTypesBitMap {
    match object.get("type") {
        None => PrimitiveTypesBitMap::all(),
        Some(Value::String(name)) => PrimitiveType::from_name(name)
            .map(|ty| PrimitiveTypesBitMap::new().insert(ty))
            .unwrap_or_else(PrimitiveTypesBitMap::all),
        Some(Value::Array(names)) => {
            let set: PrimitiveTypesBitMap = names
                .iter()
                .filter_map(serde_json::Value::as_str)
                .filter_map(PrimitiveType::from_name)
                .collect();
            if set.is_empty() {
                PrimitiveTypesBitMap::all()
            } else {
                set
            }
        }
        Some(_) => PrimitiveTypesBitMap::all(),
    }
}

/// Build the `Artifact` for one schema node (`spec.md` §4.6): iterate its
/// keys, offer each to the draft's parser, and let `$ref`/array/object
/// parsers populate the accumulators as they go.
pub(crate) fn compile_subtree<'a>(
    schema: &'a Value,
    context: CompilationContext<'a>,
) -> Result<Artifact<'a>, CompilationError> {
    match schema {
        Value::Bool(true) => Ok(Artifact::empty(context, PrimitiveTypesBitMap::all())),
        Value::Bool(false) => Ok(Artifact::empty(context, PrimitiveTypesBitMap::new())),
        Value::Object(object) => {
            let admissible = derive_admissible_types(object);
            if let Some(type_value) = object.get("type") {
                validate_type_keyword(type_value, &context)?;
            }
            let mut artifact = Artifact::empty(context, admissible);
            for (keyword, value) in object {
                if keyword == "type" {
                    continue;
                }
                if let Some(parse) = artifact.context.draft.get_parser(keyword) {
                    parse(keyword, value, object, &mut artifact)?;
                }
            }
            Ok(artifact)
        }
        other => Err(CompilationError::SchemaError {
            schema_pointer: context.pointer,
            reason: format!("schema node must be a boolean or object, got {}", PrimitiveType::of(other)),
        }),
    }
}

fn validate_type_keyword(value: &Value, context: &CompilationContext) -> Result<(), CompilationError> {
    let names_ok = match value {
        Value::String(name) => PrimitiveType::from_name(name).is_some(),
        Value::Array(items) => !items.is_empty()
            && items
                .iter()
                .all(|item| item.as_str().map_or(false, |name| PrimitiveType::from_name(name).is_some())),
        _ => false,
    };
    if names_ok {
        Ok(())
    } else {
        Err(CompilationError::SchemaError {
            schema_pointer: context.pointer.join("type"),
            reason: "`type` must be a known primitive type name or a non-empty array of them".to_string(),
        })
    }
}
