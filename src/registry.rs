//! Process-wide-for-one-compilation mapping from `(authority, pointer)` to a
//! validator identifier.
//!
//! Grounded in `jsonschema`'s lazy `$ref` resolution (`keywords::ref_`) and,
//! for the explicit `needed`/`materialized` worklist shape, in
//! `jsonschema-csr`'s compilation pipeline (`compilation::mod::JsonSchema::new`,
//! which drains a reference worklist before building the final graph). Unlike
//! both of those, `Registry` here drives an *upfront* fixpoint
//! (`compilation::compile_entrypoint`) rather than compiling `$ref` targets
//! lazily on first validation, per `spec.md` §4.7. File-based precaching
//! (`spec.md` §6's `precache(path)`) lives at `CompilationOptions::precache_file`
//! instead of here, since it decodes straight to a `Value` rather than
//! caching intermediate schema text.
use crate::paths::Pointer;
use indexmap::IndexSet;

/// `(authority, pointer)` naming one schema subtree.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct SubtreeKey {
    pub(crate) authority: String,
    pub(crate) pointer: Pointer,
}

impl SubtreeKey {
    pub(crate) fn new(authority: impl Into<String>, pointer: Pointer) -> Self {
        SubtreeKey { authority: authority.into(), pointer }
    }

    pub(crate) fn identifier(&self) -> String {
        self.pointer.to_fun_id(&self.authority)
    }
}

/// Compilation-time registry. Lives only for the duration of one
/// `JSONSchema::compile` call (see `spec.md` §5).
#[derive(Debug, Default)]
pub(crate) struct Registry {
    /// Subtrees some filter has asked for but that are not yet compiled.
    needed: Vec<SubtreeKey>,
    /// Subtrees whose validator has already been compiled.
    materialized: IndexSet<SubtreeKey>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry::default()
    }

    /// Request the validator identifier for `(authority, pointer)`. If it is
    /// not yet compiled, schedule it and return the identifier anyway — a
    /// forward reference, resolved once the fixpoint loop reaches it.
    pub(crate) fn request(&mut self, authority: &str, pointer: Pointer) -> String {
        let key = SubtreeKey::new(authority, pointer);
        let identifier = key.identifier();
        if !self.materialized.contains(&key) && !self.needed.contains(&key) {
            self.needed.push(key);
        }
        identifier
    }

    /// Drain every subtree still awaiting compilation.
    pub(crate) fn drain_needed(&mut self) -> Vec<SubtreeKey> {
        std::mem::take(&mut self.needed)
    }

    pub(crate) fn mark_materialized(&mut self, key: SubtreeKey) {
        self.materialized.insert(key);
    }

    pub(crate) fn is_materialized(&self, key: &SubtreeKey) -> bool {
        self.materialized.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_schedules_once() {
        let mut registry = Registry::new();
        let id1 = registry.request("entry", Pointer::root().join("a"));
        let id2 = registry.request("entry", Pointer::root().join("a"));
        assert_eq!(id1, id2);
        assert_eq!(registry.drain_needed().len(), 1);
        assert_eq!(registry.drain_needed().len(), 0);
    }

    #[test]
    fn materialized_subtree_is_not_rescheduled() {
        let mut registry = Registry::new();
        let key = SubtreeKey::new("entry", Pointer::root().join("a"));
        registry.mark_materialized(key.clone());
        registry.request("entry", Pointer::root().join("a"));
        assert!(registry.drain_needed().is_empty());
        assert!(registry.is_materialized(&key));
    }
}
