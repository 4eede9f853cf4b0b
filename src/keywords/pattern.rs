//! `pattern`: an ECMA-262 regular expression checked against string
//! instances, translated into `regex` crate syntax at compile time.
//!
//! Grounded in `jsonschema::keywords::pattern`: ECMA-262 character classes
//! (`\d`, `\D`, `\w`, `\W`, `\s`, `\S`) have no identical `regex`-crate
//! equivalent (Unicode-aware by default there, ASCII-only in ECMA-262), so
//! each is rewritten to an explicit character class, and `\cX` control-escape
//! sequences are expanded to the literal control character they name. Uses
//! `once_cell::sync::Lazy` where the teacher's historical version used
//! `lazy_static!` (see `DESIGN.md`).
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use once_cell::sync::Lazy;
use regex::Regex as StdRegex;
use serde_json::{Map, Value};

static CONTROL_GROUPS_RE: Lazy<StdRegex> = Lazy::new(|| StdRegex::new(r"\\c[A-Za-z]").expect("valid regex"));

fn replace_control_group(pattern: &str) -> String {
    let mut result = pattern.to_string();
    while let Some(found) = CONTROL_GROUPS_RE.find(&result) {
        let letter = found.as_str().chars().nth(2).expect("matched \\cX");
        let code = (letter.to_ascii_uppercase() as u8 - b'A' + 1) as char;
        result.replace_range(found.range(), &code.to_string());
    }
    result
}

/// Translate an ECMA-262 pattern into a `regex`-crate-compatible one.
pub(crate) fn convert_regex(pattern: &str) -> String {
    let pattern = replace_control_group(pattern);
    pattern
        .replace(r"\d", "[0-9]")
        .replace(r"\D", "[^0-9]")
        .replace(r"\w", "[A-Za-z0-9_]")
        .replace(r"\W", "[^A-Za-z0-9_]")
        .replace(r"\s", "[ \\t\\n\\r\\f\\v]")
        .replace(r"\S", "[^ \\t\\n\\r\\f\\v]")
}

#[derive(Debug)]
struct Pattern {
    regex: StdRegex,
    source: String,
    schema_pointer: Pointer,
}

impl Keyword for Pattern {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::String(string) = instance {
            if !self.regex.is_match(string) {
                return error(ValidationError::new(
                    ValidationErrorKind::PatternMismatch { pattern: self.source.clone() },
                    self.schema_pointer.clone(),
                    instance_path.to_pointer(),
                    owned(instance),
                ));
            }
        }
        no_error()
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        match instance {
            Value::String(string) => self.regex.is_match(string),
            _ => true,
        }
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let source = value.as_str().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`pattern` must be a string".to_string(),
    })?;
    let translated = convert_regex(source);
    let regex = StdRegex::new(&translated).map_err(|error| CompilationError::InvalidRegex {
        pattern: source.to_string(),
        reason: error.to_string(),
    })?;
    artifact.filters.push(Box::new(Pattern {
        regex,
        source: source.to_string(),
        schema_pointer: artifact.context.pointer.join(keyword),
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_digit_class() {
        assert_eq!(convert_regex(r"^\d+$"), "^[0-9]+$");
    }

    #[test]
    fn expands_control_escape() {
        assert_eq!(replace_control_group(r"\cA"), "\u{1}");
    }
}
