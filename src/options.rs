//! `CompilationOptions`: the configuration bag threaded through compilation
//! as the `option bag` component of `Artifact::context` (`spec.md` §3).
//!
//! Grounded in `jsonschema::compilation::options::CompilationOptions`'s
//! builder, trimmed to what this crate's non-goals leave in scope: no
//! external resolver (remote `$ref` is unsupported), no content
//! media-type/encoding checks, no custom keyword factories.
use crate::{error::CompilationError, format::FormatRegistry, paths::Pointer, schemas::Draft};
use serde_json::Value;
use std::{fmt, fs, path::Path, sync::Arc};

#[derive(Clone, Debug)]
pub struct CompilationOptions {
    draft: Option<Draft>,
    entrypoint: Pointer,
    formats: FormatRegistry,
    precached: Vec<(Arc<str>, Arc<Value>)>,
    authority: Option<Arc<str>>,
    decoder: Decoder,
}

/// Turns schema text into a decoded `Value`, as used by `precache_file`.
/// Grounded in `spec.md` §6's `decoder` option; defaults to `serde_json`.
#[derive(Clone)]
struct Decoder(Arc<dyn Fn(&str) -> Result<Value, crate::error::CompilationError> + Send + Sync>);

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Decoder(..)")
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder(Arc::new(|text: &str| {
            serde_json::from_str(text).map_err(|error| crate::error::CompilationError::InvalidJson {
                reason: error.to_string(),
            })
        }))
    }
}

impl Default for CompilationOptions {
    fn default() -> Self {
        CompilationOptions {
            draft: None,
            entrypoint: Pointer::root(),
            formats: FormatRegistry::new(),
            precached: Vec::new(),
            authority: None,
            decoder: Decoder::default(),
        }
    }
}

impl CompilationOptions {
    #[must_use]
    pub fn new() -> Self {
        CompilationOptions::default()
    }

    /// Force a draft rather than detecting it from `$schema`
    /// (`schemas::draft_from_schema`), which otherwise takes precedence.
    #[must_use]
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Compile the subtree at `pointer` rather than the document root
    /// (`spec.md` §4.7 step 1: resolve `entrypoint`, default `"/"`).
    #[must_use]
    pub fn with_entrypoint(mut self, pointer: Pointer) -> Self {
        self.entrypoint = pointer;
        self
    }

    #[must_use]
    pub fn with_format(mut self, name: impl Into<String>, format: impl crate::format::Format + 'static) -> Self {
        self.formats = self.formats.with_format(name, format);
        self
    }

    #[must_use]
    pub fn without_format(mut self, name: impl Into<String>) -> Self {
        self.formats = self.formats.without_format(name);
        self
    }

    #[must_use]
    pub fn require_utc_date_time(mut self) -> Self {
        self.formats = self.formats.require_utc_date_time();
        self
    }

    /// Skip all `format` checks, leaving them as unenforced annotations.
    #[must_use]
    pub fn without_format_validation(mut self) -> Self {
        self.formats = self.formats.disable_by_default();
        self
    }

    /// Make `authority` resolvable to `document` for `$ref`, without reading
    /// anything from disk.
    #[must_use]
    pub fn precache(mut self, authority: impl Into<Arc<str>>, document: Value) -> Self {
        self.precached.push((authority.into(), Arc::new(document)));
        self
    }

    /// Read `path`'s contents, decode them with the configured decoder, and
    /// make the result resolvable to `path`'s string form for `$ref`
    /// (`spec.md` §6's `precache(path)` file-ingestion interface).
    pub fn precache_file(mut self, path: impl AsRef<Path>) -> Result<Self, CompilationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| CompilationError::Io { reason: error.to_string() })?;
        let document = (self.decoder.0)(&text)?;
        self.precached.push((Arc::from(path.to_string_lossy().as_ref()), Arc::new(document)));
        Ok(self)
    }

    /// Override `$schema`/`$id`-derived authority detection outright.
    #[must_use]
    pub fn with_authority(mut self, authority: impl Into<Arc<str>>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Replace the schema-text decoder `precache_file` uses; defaults to
    /// `serde_json::from_str`.
    #[must_use]
    pub fn with_decoder(
        mut self,
        decoder: impl Fn(&str) -> Result<Value, CompilationError> + Send + Sync + 'static,
    ) -> Self {
        self.decoder = Decoder(Arc::new(decoder));
        self
    }

    pub(crate) fn draft(&self) -> Option<Draft> {
        self.draft
    }

    pub(crate) fn entrypoint(&self) -> &Pointer {
        &self.entrypoint
    }

    pub(crate) fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub(crate) fn precached(&self) -> &[(Arc<str>, Arc<Value>)] {
        &self.precached
    }

    pub(crate) fn authority(&self) -> Option<&Arc<str>> {
        self.authority.as_ref()
    }
}
