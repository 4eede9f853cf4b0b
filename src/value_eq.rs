//! Structural equality used by `enum`, `const`, `uniqueItems` and `contains`.
//!
//! Grounded in `jsonschema::helpers::equal`, which special-cases numbers to
//! compare by numeric value rather than by internal representation (so `1`
//! and `1.0` are equal). The teacher only applies that special case at the
//! top level; `spec.md` §4.5's `uniqueItems` entry calls for numbers to
//! compare equal "iff their numeric values match" wherever they occur in the
//! tree, so this version recurses into arrays and objects instead of
//! falling back to `Value`'s derived `PartialEq` once it descends past the
//! top level (the Open Question recorded in `DESIGN.md`).
use serde_json::Value;

#[must_use]
pub(crate) fn eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| eq(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| right.get(key).is_some_and(|other| eq(value, other)))
        }
        (left, right) => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_and_float_are_equal() {
        assert!(eq(&json!(1), &json!(1.0)));
    }

    #[test]
    fn nested_numeric_equality() {
        assert!(eq(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
    }

    #[test]
    fn object_key_order_is_irrelevant() {
        assert!(eq(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
    }

    #[test]
    fn mismatched_types_are_not_equal() {
        assert!(!eq(&json!("1"), &json!(1)));
    }
}
