//! Top-level compilation entry point: turns a schema document into a
//! `JSONSchema`, an immutable map of fully-materialized `Artifact`s keyed by
//! the identifier scheme in `registry::SubtreeKey`.
//!
//! Grounded in `jsonschema::compilation::JSONSchema::compile` for the public
//! shape (`options()`/`compile`/`validate`/`is_valid`), and in
//! `jsonschema-csr`'s worklist-draining pipeline for the fixpoint loop that
//! replaces the teacher's lazy, validate-time `$ref` resolution with an
//! upfront one (`spec.md` §4.7).
use crate::{
    context::{CompilationContext, DEFAULT_SCOPE},
    driver::{self, Artifact},
    error::{CompilationError, ErrorIterator},
    options::CompilationOptions,
    paths::InstancePath,
    registry::{Registry, SubtreeKey},
    schemas::{draft_from_schema, id_of, Draft},
};
use serde_json::Value;
use std::{cell::RefCell, collections::HashMap, sync::Arc};

/// A schema compiled into a validation tree. Borrows the input document for
/// its whole lifetime (`spec.md` §5: a compiled artifact never outlives the
/// `serde_json::Value` it was built from), matching the lifetime-parameterized
/// `JSONSchema<'a>` the teacher's pre-`SchemaNode` compiler used.
#[derive(Debug)]
pub struct JSONSchema<'a> {
    root: &'a Value,
    draft: Draft,
    options: Arc<CompilationOptions>,
    entrypoint: String,
    validators: HashMap<String, Artifact<'a>>,
}

impl<'a> JSONSchema<'a> {
    /// A default `CompilationOptions` builder, mirroring
    /// `JSONSchema::options().with_draft(..).compile(&schema)`.
    #[must_use]
    pub fn options() -> CompilationOptions {
        CompilationOptions::default()
    }

    /// Equivalent to `JSONSchema::options().compile(schema)`.
    pub fn compile(schema: &'a Value) -> Result<JSONSchema<'a>, CompilationError> {
        Self::options().compile(schema)
    }

    /// Run validation, collecting every mismatch found (`spec.md` §4.1's
    /// "Validate" operation — a `validate` entrypoint that never
    /// short-circuits on the first error).
    pub fn validate<'i>(&'i self, instance: &'i Value) -> ErrorIterator<'i> {
        self.entrypoint_artifact().validate(self, instance, &InstancePath::new())
    }

    /// `spec.md` §4.1's "IsValid" operation: same check, short-circuiting at
    /// the first mismatch and reporting only a boolean.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.entrypoint_artifact().is_valid(self, instance)
    }

    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }

    #[must_use]
    pub fn document(&self) -> &Value {
        self.root
    }

    pub(crate) fn formats(&self) -> &crate::format::FormatRegistry {
        self.options.formats()
    }

    /// The entrypoint schema's `$id` (or, under draft 4, `id`), if present.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.entrypoint_metadata(if self.draft == Draft::Draft4 { "id" } else { "$id" })
    }

    #[must_use]
    pub fn dollar_schema(&self) -> Option<&Value> {
        self.entrypoint_metadata("$schema")
    }

    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.entrypoint_metadata("default")
    }

    #[must_use]
    pub fn examples(&self) -> Option<&Value> {
        self.entrypoint_metadata("examples")
    }

    #[must_use]
    pub fn description(&self) -> Option<&Value> {
        self.entrypoint_metadata("description")
    }

    #[must_use]
    pub fn title(&self) -> Option<&Value> {
        self.entrypoint_metadata("title")
    }

    /// Annotation keywords (`spec.md` §6) are read straight off the
    /// entrypoint schema's own JSON object; they are never compiled into
    /// `Artifact::filters` since they carry no validation behavior.
    fn entrypoint_metadata(&self, key: &str) -> Option<&Value> {
        self.root.as_object()?.get(key)
    }

    fn entrypoint_artifact(&self) -> &Artifact<'a> {
        self.validators.get(&self.entrypoint).expect("entrypoint is always materialized")
    }

    /// Look up a materialized subtree by its `SubtreeKey::identifier()`,
    /// used by `$ref`'s compiled keyword at validation time.
    pub(crate) fn get_validator(&self, identifier: &str) -> Option<&Artifact<'a>> {
        self.validators.get(identifier)
    }
}

/// Compile `schema` under `options` into a `JSONSchema`.
///
/// `$ref` resolution is upfront: every reference must resolve to a JSON
/// Pointer within either the entrypoint's own authority (the scope
/// established by the root schema's `$id`/`id`, or the default scope) or one
/// of `options.precached()`'s authorities — no networked or disk-based
/// resolution is attempted (`spec.md`'s remote-`$ref` non-goal). A precached
/// document is intentionally leaked (`Box::leak`) to extend its lifetime to
/// match the freshly-borrowed root schema's: `JSONSchema<'a>`'s compiled
/// `Artifact`s borrow into whichever document they came from, and a document
/// owned by `CompilationOptions` (itself stored inside the `JSONSchema` being
/// built) cannot be borrowed from without becoming self-referential. Since a
/// compiled `JSONSchema` is meant to be built once and reused for a process's
/// lifetime, trading that one-time allocation for sound borrows is the
/// pragmatic choice here — see `DESIGN.md`.
pub(crate) fn compile_entrypoint(
    schema: &Value,
    options: CompilationOptions,
) -> Result<JSONSchema<'_>, CompilationError> {
    let draft = options.draft().unwrap_or_else(|| draft_from_schema(schema).unwrap_or(Draft::Draft202012));
    let authority: Arc<str> = match options.authority() {
        Some(authority) => Arc::clone(authority),
        None => match id_of(draft, schema) {
            Some(id) => Arc::from(id),
            None => Arc::from(DEFAULT_SCOPE),
        },
    };
    let options = Arc::new(options);
    let formats = Arc::new(options.formats().clone());
    let registry = Arc::new(RefCell::new(Registry::new()));

    let mut documents: HashMap<String, &Value> = HashMap::new();
    documents.insert(authority.to_string(), schema);
    for (other_authority, document) in options.precached() {
        let leaked: &'static Value = Box::leak(Box::new((**document).clone()));
        documents.insert(other_authority.to_string(), leaked);
    }

    let root_context =
        CompilationContext::new(Arc::clone(&authority), schema, draft, formats, Arc::clone(&options), Arc::clone(&registry));
    let (entrypoint_context, entrypoint_schema) = descend_to(root_context, options.entrypoint(), schema)?;
    let entrypoint_key = SubtreeKey::new(authority.as_ref(), entrypoint_context.pointer.clone());
    let entrypoint = entrypoint_key.identifier();

    let mut validators = HashMap::new();
    let root_artifact = driver::compile_subtree(entrypoint_schema, entrypoint_context)?;
    registry.borrow_mut().mark_materialized(entrypoint_key);
    validators.insert(entrypoint.clone(), root_artifact);

    // Drain the worklist `$ref` parsing populated: every still-unmaterialized
    // subtree gets its own `Artifact`, which may in turn request more.
    loop {
        let needed = registry.borrow_mut().drain_needed();
        if needed.is_empty() {
            break;
        }
        for key in needed {
            if registry.borrow().is_materialized(&key) {
                continue;
            }
            let document = *documents
                .get(&key.authority)
                .ok_or_else(|| CompilationError::UnresolvedReference { reference: key.identifier() })?;
            let document_context = CompilationContext::new(
                Arc::from(key.authority.as_str()),
                document,
                draft,
                Arc::new(options.formats().clone()),
                Arc::clone(&options),
                Arc::clone(&registry),
            );
            let (context, target) = descend_to(document_context, &key.pointer, document)?;
            let artifact = driver::compile_subtree(target, context)?;
            registry.borrow_mut().mark_materialized(key.clone());
            validators.insert(key.identifier(), artifact);
        }
    }

    Ok(JSONSchema { root: schema, draft, options, entrypoint, validators })
}

/// Walk `pointer` from the root, descending `context` one segment at a time
/// so a forward reference's own `$id` scoping lines up the same way it would
/// have if compilation had reached it by walking down from the root in the
/// first place. Returns the context and schema node at `pointer`.
fn descend_to<'a>(
    mut context: CompilationContext<'a>,
    pointer: &crate::paths::Pointer,
    root: &'a Value,
) -> Result<(CompilationContext<'a>, &'a Value), CompilationError> {
    let mut node = root;
    for chunk in pointer.as_slice() {
        node = match chunk {
            crate::paths::PathChunk::Name(name) => node
                .as_object()
                .and_then(|object| object.get(name))
                .ok_or_else(|| unresolved(pointer))?,
            crate::paths::PathChunk::Index(index) => {
                node.as_array().and_then(|array| array.get(*index)).ok_or_else(|| unresolved(pointer))?
            }
        };
        context = context.descend(chunk.clone(), node);
    }
    Ok((context, node))
}

fn unresolved(pointer: &crate::paths::Pointer) -> CompilationError {
    CompilationError::UnresolvedReference { reference: pointer.to_uri() }
}

impl CompilationOptions {
    /// Compile `schema` with these options (`spec.md` §6's entrypoint).
    pub fn compile<'a>(&self, schema: &'a Value) -> Result<JSONSchema<'a>, CompilationError> {
        compile_entrypoint(schema, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_trivial_schema_and_validates() {
        let schema = json!({"type": "string"});
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!("hello")));
        assert!(!compiled.is_valid(&json!(42)));
    }

    #[test]
    fn resolves_internal_ref() {
        let schema = json!({
            "definitions": {"positive": {"type": "integer", "minimum": 0}},
            "$ref": "#/definitions/positive"
        });
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!(5)));
        assert!(!compiled.is_valid(&json!(-1)));
    }

    #[test]
    fn collects_multiple_errors() {
        let schema = json!({
            "type": "object",
            "required": ["a", "b"],
            "properties": {"a": {"type": "string"}}
        });
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        let errors: Vec<_> = compiled.validate(&json!({"a": 1})).collect();
        assert!(errors.len() >= 2);
    }
}
