//! # schema-compiler
//!
//! A crate for compiling JSON Schema documents (drafts 4, 6, 7, 2019-09,
//! 2020-12) into an executable validation tree, so that repeated validation
//! against the same schema pays the keyword-dispatch cost once, at compile
//! time, rather than on every instance.
//!
//! ## Example
//!
//! ```rust
//! use schema_compiler::JSONSchema;
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foo");
//! let compiled = JSONSchema::compile(&schema).expect("valid schema");
//! assert!(compiled.is_valid(&instance));
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::needless_borrow,
    clippy::print_stdout,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod accumulator;
mod compilation;
mod context;
mod driver;
mod error;
mod format;
mod keyword;
mod keywords;
mod options;
mod paths;
mod primitive_type;
mod registry;
mod schemas;
mod value_eq;

pub use compilation::JSONSchema;
pub use error::{CompilationError, ErrorIterator, ValidationError, ValidationErrorKind};
pub use format::{Format, FormatRegistry};
pub use options::CompilationOptions;
pub use paths::{PathChunk, Pointer};
pub use primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
pub use schemas::{draft_from_schema, draft_from_url, Draft};

use serde_json::Value;

/// A shortcut for validating `instance` against `schema`, detecting the
/// draft automatically. Panics if `schema` fails to compile.
/// ```rust
/// use schema_compiler::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = JSONSchema::compile(schema).expect("invalid schema");
    compiled.is_valid(instance)
}

#[cfg(test)]
mod tests_util {
    use super::JSONSchema;
    use serde_json::Value;

    pub(crate) fn is_not_valid(schema: Value, instance: Value) {
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        assert!(!compiled.is_valid(&instance), "{} should not be valid", instance);
        assert!(compiled.validate(&instance).next().is_some(), "{} should not be valid", instance);
    }

    pub(crate) fn is_valid(schema: Value, instance: Value) {
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&instance), "{} should be valid", instance);
        assert!(compiled.validate(&instance).next().is_none(), "{} should be valid", instance);
    }

    pub(crate) fn assert_schema_path(schema: Value, instance: Value, expected: &str) {
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        let error = compiled.validate(&instance).next().expect("should be an error");
        assert_eq!(error.schema_pointer.to_uri(), expected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        assert!(is_valid(&schema, &json!("foobar")));
        assert!(!is_valid(&schema, &json!("foo")));
    }
}
