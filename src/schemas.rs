//! JSON Schema draft detection and the per-draft keyword→parser table.
//!
//! Grounded in `jsonschema::schemas`: `Draft::get_validator` dispatches a
//! keyword name to its `compile`/`parse` function, varying by draft (e.g.
//! draft 4's boolean `exclusiveMinimum` vs. later drafts' numeric form).
use crate::{driver::Artifact, error::CompilationError, keywords};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Draft {
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    Draft202012,
}

impl Draft {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Draft::Draft4 => "draft4",
            Draft::Draft6 => "draft6",
            Draft::Draft7 => "draft7",
            Draft::Draft201909 => "2019-09",
            Draft::Draft202012 => "2020-12",
        }
    }

    pub(crate) fn supports_dependent_keywords(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }

    pub(crate) fn supports_prefix_items(self) -> bool {
        matches!(self, Draft::Draft202012)
    }

    pub(crate) fn supports_unevaluated(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }
}

/// A keyword's contribution to the artifact being built for its enclosing
/// subtree: `(keyword, value, parent_object, artifact)`. `Draft::get_parser`
/// already decides applicability; a `ParseFn` itself only reports malformed
/// keyword values. Context (authority, pointer, draft, formats, options,
/// registry) is reached through `artifact.context` rather than threaded as
/// a separate argument.
///
/// `value`/`parent` and the `Artifact` being built share one explicit
/// lifetime: a parser that compiles an inline subschema (`allOf`, `items`,
/// ...) builds a child `Artifact<'a>` borrowing the very same document, so
/// the three must be tied together rather than elided independently.
pub(crate) type ParseFn =
    for<'a> fn(&str, &'a Value, &'a Map<String, Value>, &mut Artifact<'a>) -> Result<(), CompilationError>;

impl Draft {
    pub(crate) fn get_parser(self, keyword: &str) -> Option<ParseFn> {
        // Keywords common to every supported draft.
        match keyword {
            "enum" => return Some(keywords::enum_::parse),
            "const" if self != Draft::Draft4 => return Some(keywords::const_::parse),
            "allOf" => return Some(keywords::all_of::parse),
            "anyOf" => return Some(keywords::any_of::parse),
            "oneOf" => return Some(keywords::one_of::parse),
            "not" => return Some(keywords::not::parse),
            "$ref" => return Some(keywords::ref_::parse),
            "multipleOf" => return Some(keywords::multiple_of::parse),
            "maxLength" => return Some(keywords::max_length::parse),
            "minLength" => return Some(keywords::min_length::parse),
            "pattern" => return Some(keywords::pattern::parse),
            "format" => return Some(keywords::format::parse),
            "maxItems" => return Some(keywords::max_items::parse),
            "minItems" => return Some(keywords::min_items::parse),
            "uniqueItems" => return Some(keywords::unique_items::parse),
            "items" => return Some(keywords::items::parse),
            "contains" => return Some(keywords::contains::parse),
            "maxProperties" => return Some(keywords::max_properties::parse),
            "minProperties" => return Some(keywords::min_properties::parse),
            "required" => return Some(keywords::required::parse),
            "properties" => return Some(keywords::properties::parse),
            "patternProperties" => return Some(keywords::pattern_properties::parse),
            "additionalProperties" => return Some(keywords::additional_properties::parse),
            "propertyNames" if self != Draft::Draft4 => return Some(keywords::property_names::parse),
            _ => {}
        }
        if self == Draft::Draft4 {
            return match keyword {
                "exclusiveMinimum" | "exclusiveMaximum" => None, // bound into minimum/maximum below
                "minimum" => Some(keywords::legacy::minimum_draft4::parse),
                "maximum" => Some(keywords::legacy::maximum_draft4::parse),
                "dependencies" => Some(keywords::dependencies::parse),
                "additionalItems" => Some(keywords::additional_items::parse),
                _ => None,
            };
        }
        match keyword {
            "minimum" => Some(keywords::minimum::parse),
            "maximum" => Some(keywords::maximum::parse),
            "exclusiveMinimum" => Some(keywords::exclusive_minimum::parse),
            "exclusiveMaximum" => Some(keywords::exclusive_maximum::parse),
            "additionalItems" if !self.supports_prefix_items() => Some(keywords::additional_items::parse),
            "if" if self != Draft::Draft6 => Some(keywords::if_::parse),
            "prefixItems" if self.supports_prefix_items() => Some(keywords::prefix_items::parse),
            "dependencies" if !self.supports_dependent_keywords() => Some(keywords::dependencies::parse),
            "dependentRequired" if self.supports_dependent_keywords() => {
                Some(keywords::dependent_required::parse)
            }
            "dependentSchemas" if self.supports_dependent_keywords() => {
                Some(keywords::dependent_schemas::parse)
            }
            "unevaluatedProperties" if self.supports_unevaluated() => {
                Some(keywords::unevaluated_properties::parse)
            }
            "unevaluatedItems" if self.supports_unevaluated() => Some(keywords::unevaluated_items::parse),
            _ => None,
        }
    }
}

/// Detect the draft from a schema's `$schema` value, defaulting per
/// `CompilationOptions::default()` to 2020-12 (`spec.md` §6).
#[must_use]
pub fn draft_from_schema(schema: &Value) -> Option<Draft> {
    let url = schema.as_object()?.get("$schema")?.as_str()?;
    draft_from_url(url)
}

#[must_use]
pub fn draft_from_url(url: &str) -> Option<Draft> {
    let url = url.trim_end_matches('#');
    match url {
        "http://json-schema.org/draft-04/schema" => Some(Draft::Draft4),
        "http://json-schema.org/draft-06/schema" => Some(Draft::Draft6),
        "http://json-schema.org/draft-07/schema" => Some(Draft::Draft7),
        "https://json-schema.org/draft/2019-09/schema" => Some(Draft::Draft201909),
        "https://json-schema.org/draft/2020-12/schema" => Some(Draft::Draft202012),
        _ => None,
    }
}

/// `$id` (or, under draft 4, `id`) of a schema node, used to track the base
/// URI scope while compiling.
#[must_use]
pub(crate) fn id_of(draft: Draft, schema: &Value) -> Option<&str> {
    let object = schema.as_object()?;
    let key = if draft == Draft::Draft4 { "id" } else { "$id" };
    object.get(key)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"$schema": "http://json-schema.org/draft-07/schema#"}), Some(Draft::Draft7))]
    #[test_case(json!({"$schema": "https://json-schema.org/draft/2020-12/schema"}), Some(Draft::Draft202012))]
    #[test_case(json!({"$schema": "http://example.com/custom#"}), None)]
    #[test_case(json!({}), None)]
    fn detects_draft(schema: Value, expected: Option<Draft>) {
        assert_eq!(draft_from_schema(&schema), expected);
    }

    #[test]
    fn if_then_else_is_not_registered_before_draft_07() {
        assert!(Draft::Draft6.get_parser("if").is_none());
        assert!(Draft::Draft4.get_parser("if").is_none());
        assert!(Draft::Draft7.get_parser("if").is_some());
        assert!(Draft::Draft201909.get_parser("if").is_some());
        assert!(Draft::Draft202012.get_parser("if").is_some());
    }
}
