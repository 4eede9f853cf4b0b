//! Compile-time and validation-time error types.
//!
//! Grounded in `jsonschema::error`: a `CompilationError` for malformed
//! schemas (fatal, returned from `JSONSchema::compile`) and a
//! `ValidationError` carried by an `ErrorIterator` for first-class failure
//! results returned from `validate`.
use crate::paths::Pointer;
use serde_json::Value;
use std::{borrow::Cow, fmt, iter::{empty, once}};

/// Fatal error raised while compiling a schema into a validator.
#[derive(Debug, PartialEq)]
pub enum CompilationError {
    /// A keyword's value has the wrong JSON type (e.g. `"required": "x"`).
    SchemaError { schema_pointer: Pointer, reason: String },
    /// `$ref` points at something that does not exist in any loaded schema.
    UnresolvedReference { reference: String },
    /// A keyword is not supported under the selected draft.
    UnsupportedKeyword { keyword: String, draft: &'static str },
    /// The schema text itself failed to parse as JSON.
    InvalidJson { reason: String },
    /// An I/O error occurred while loading a schema file via `precache`.
    Io { reason: String },
    /// A regular expression in `pattern`/`patternProperties` failed to compile.
    InvalidRegex { pattern: String, reason: String },
    /// The document's `$id`/`$ref` was not a valid URI reference.
    InvalidUrl { reason: String },
}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilationError::SchemaError { schema_pointer, reason } => {
                write!(f, "invalid schema at {}: {}", schema_pointer, reason)
            }
            CompilationError::UnresolvedReference { reference } => {
                write!(f, "unresolved reference: {}", reference)
            }
            CompilationError::UnsupportedKeyword { keyword, draft } => {
                write!(f, "keyword `{}` is not supported under {}", keyword, draft)
            }
            CompilationError::InvalidJson { reason } => write!(f, "invalid JSON: {}", reason),
            CompilationError::Io { reason } => write!(f, "I/O error: {}", reason),
            CompilationError::InvalidRegex { pattern, reason } => {
                write!(f, "invalid regex `{}`: {}", pattern, reason)
            }
            CompilationError::InvalidUrl { reason } => write!(f, "invalid URL: {}", reason),
        }
    }
}

impl std::error::Error for CompilationError {}

impl From<url::ParseError> for CompilationError {
    fn from(error: url::ParseError) -> Self {
        CompilationError::InvalidUrl { reason: error.to_string() }
    }
}

/// Kinds of first-class validation failures, matching `spec.md` §7 exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationErrorKind {
    TypeMismatch { expected: String },
    EnumMismatch { options: Value },
    ConstMismatch { expected: Value },
    RangeViolation { reason: String },
    LengthViolation { reason: String },
    PatternMismatch { pattern: String },
    FormatMismatch { format: String },
    RequiredMissing { property: String },
    AdditionalRejected { property: String },
    PropertyNameMismatch { reason: String },
    DependencyUnsatisfied { property: String, reason: String },
    ContainsUnsatisfied { reason: String },
    UniqueViolation,
    CombinatorMismatch { combinator: &'static str, reason: Option<String> },
    RefMismatch,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::TypeMismatch { expected } => {
                write!(f, "expected type {}", expected)
            }
            ValidationErrorKind::EnumMismatch { .. } => {
                write!(f, "value is not one of the enumerated options")
            }
            ValidationErrorKind::ConstMismatch { expected } => {
                write!(f, "value does not equal {}", expected)
            }
            ValidationErrorKind::RangeViolation { reason } => f.write_str(reason),
            ValidationErrorKind::LengthViolation { reason } => f.write_str(reason),
            ValidationErrorKind::PatternMismatch { pattern } => {
                write!(f, "does not match pattern `{}`", pattern)
            }
            ValidationErrorKind::FormatMismatch { format } => {
                write!(f, "is not a valid `{}`", format)
            }
            ValidationErrorKind::RequiredMissing { property } => {
                write!(f, "required property `{}` is missing", property)
            }
            ValidationErrorKind::AdditionalRejected { property } => {
                write!(f, "additional property `{}` is not allowed", property)
            }
            ValidationErrorKind::PropertyNameMismatch { reason } => f.write_str(reason),
            ValidationErrorKind::DependencyUnsatisfied { property, reason } => {
                write!(f, "dependency of `{}` unsatisfied: {}", property, reason)
            }
            ValidationErrorKind::ContainsUnsatisfied { reason } => f.write_str(reason),
            ValidationErrorKind::UniqueViolation => write!(f, "array items are not unique"),
            ValidationErrorKind::CombinatorMismatch { combinator, reason } => match reason {
                Some(reason) => write!(f, "{} failed: {}", combinator, reason),
                None => write!(f, "{} failed", combinator),
            },
            ValidationErrorKind::RefMismatch => write!(f, "referenced schema failed"),
        }
    }
}

/// A single validation failure. `error_value`/`instance` is cloned into the
/// error rather than borrowed, because a mismatch discovered deep inside a
/// `$ref` or combinator call must outlive the stack frame that found it.
#[derive(Clone, Debug)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub schema_pointer: Pointer,
    pub instance_pointer: Pointer,
    pub error_value: Value,
    pub ref_trace: Vec<Pointer>,
    pub reason: Option<String>,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        schema_pointer: Pointer,
        instance_pointer: Pointer,
        error_value: Value,
    ) -> Self {
        ValidationError { kind, schema_pointer, instance_pointer, error_value, ref_trace: Vec::new(), reason: None }
    }

    /// Record that this error crossed a `$ref` boundary at `referrer`,
    /// innermost-first (the boundary closest to where the error originated
    /// is pushed first).
    #[must_use]
    pub(crate) fn with_ref_crossing(mut self, referrer: Pointer) -> Self {
        self.ref_trace.push(referrer);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at instance path {} (schema: {})",
            self.kind, self.instance_pointer, self.schema_pointer
        )
    }
}

impl std::error::Error for ValidationError {}

pub type ErrorIterator<'a> = Box<dyn Iterator<Item = ValidationError> + 'a>;

pub(crate) fn no_error<'a>() -> ErrorIterator<'a> {
    Box::new(empty())
}

pub(crate) fn error<'a>(err: ValidationError) -> ErrorIterator<'a> {
    Box::new(once(err))
}

/// Helper used throughout the keyword modules: clone `instance` into an
/// owned `Value` for `error_value`, matching `jsonschema`'s use of
/// `Cow<Value>` at the boundary between borrowed validation and owned
/// errors.
pub(crate) fn owned(instance: &Value) -> Value {
    Cow::Borrowed(instance).into_owned()
}
