//! Per-subtree compilation context: the immutable half of `Artifact`'s
//! `context` field (`spec.md` §3) — authority, pointer, schema root, draft,
//! format map, and option bag. The mutable half (the cross-subtree
//! `Registry`) is threaded separately, as in `jsonschema-csr`'s pipeline.
//!
//! Grounded in `jsonschema::compilation::context::CompilationContext`,
//! extended with the fields `spec.md` names explicitly (`authority`,
//! `format map`, `option bag`) that the teacher keeps elsewhere.
use crate::{format::FormatRegistry, options::CompilationOptions, paths::Pointer, registry::Registry, schemas::Draft};
use serde_json::Value;
use std::{cell::RefCell, sync::Arc};
use url::Url;

pub(crate) const DEFAULT_SCOPE: &str = "json-schema:///";

/// Immutable per-subtree compilation context, plus shared access to the one
/// `Registry` for the whole compilation pass. The registry is reached
/// through a `RefCell` (like `paths::InstancePath`'s runtime stack) so that
/// `parse` functions can request `$ref` targets while only holding `&Self`,
/// keeping `Artifact`'s `context` field read-only from every filter's point
/// of view.
#[derive(Debug)]
pub(crate) struct CompilationContext<'a> {
    pub(crate) authority: Arc<str>,
    pub(crate) pointer: Pointer,
    pub(crate) root: &'a Value,
    pub(crate) draft: Draft,
    pub(crate) formats: Arc<FormatRegistry>,
    pub(crate) options: Arc<CompilationOptions>,
    pub(crate) registry: Arc<RefCell<Registry>>,
    scope: Arc<Url>,
}

impl<'a> CompilationContext<'a> {
    /// `formats`/`options`/`registry` are `Arc`-shared rather than borrowed:
    /// `JSONSchema` stores both the compiled `Artifact`s and their
    /// `CompilationOptions` in the same struct, so a context born from a
    /// reference into `JSONSchema`'s own fields would be self-referential.
    /// Sharing via `Arc` keeps every subtree's context independent of where
    /// its owner ends up living.
    pub(crate) fn new(
        authority: impl Into<Arc<str>>,
        root: &'a Value,
        draft: Draft,
        formats: Arc<FormatRegistry>,
        options: Arc<CompilationOptions>,
        registry: Arc<RefCell<Registry>>,
    ) -> Self {
        let authority = authority.into();
        // The root scope starts at the document's own authority (its `$id`,
        // or the default scope when it has none) rather than always at
        // `DEFAULT_SCOPE`, so a same-document `#/...` `$ref` resolves back to
        // that same authority instead of silently drifting to the default one.
        let scope = Url::parse(&authority).unwrap_or_else(|_| Url::parse(DEFAULT_SCOPE).expect("default scope is a valid URL"));
        CompilationContext {
            authority,
            pointer: Pointer::root(),
            root,
            draft,
            formats,
            options,
            registry,
            scope: Arc::new(scope),
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(root: &'a Value, draft: Draft) -> Self {
        CompilationContext::new(
            "json-schema:///",
            root,
            draft,
            Arc::new(FormatRegistry::default()),
            Arc::new(CompilationOptions::default()),
            Arc::new(RefCell::new(Registry::new())),
        )
    }

    /// A context for the subtree at `pointer.join(segment)`, updating the
    /// `$id`/`id` scope if `schema` declares one (`spec.md` invariant 3: a
    /// child's pointer extends its parent's by exactly one segment).
    pub(crate) fn descend(&self, segment: impl Into<crate::paths::PathChunk>, schema: &Value) -> Self {
        let pointer = self.pointer.join(segment);
        let scope = match crate::schemas::id_of(self.draft, schema) {
            Some(id) => match Url::options().base_url(Some(&self.scope)).parse(id) {
                Ok(url) => Arc::new(url),
                Err(_) => Arc::clone(&self.scope),
            },
            None => Arc::clone(&self.scope),
        };
        CompilationContext {
            authority: Arc::clone(&self.authority),
            pointer,
            root: self.root,
            draft: self.draft,
            formats: Arc::clone(&self.formats),
            options: Arc::clone(&self.options),
            registry: Arc::clone(&self.registry),
            scope,
        }
    }

    /// Resolve a `$ref` value against the current scope, as the teacher's
    /// `CompilationContext::build_url` does.
    pub(crate) fn build_url(&self, reference: &str) -> Result<Url, url::ParseError> {
        Url::options().base_url(Some(&self.scope)).parse(reference)
    }

    pub(crate) fn scope(&self) -> &Url {
        &self.scope
    }
}
