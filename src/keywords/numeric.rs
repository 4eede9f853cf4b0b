//! Shared comparison plumbing for `minimum`/`maximum`/`exclusiveMinimum`/
//! `exclusiveMaximum`.
//!
//! Grounded in `jsonschema::keywords::minimum`/`maximum`/`exclusive_minimum`/
//! `exclusive_maximum`, each of which the teacher splits into three structs
//! (`*U64Validator`/`*I64Validator`/`*F64Validator`) dispatched by a
//! `validate!` macro so every comparison goes through `num_cmp::NumCmp`
//! without losing precision converting between representations. Consolidated
//! here into one `Limit` enum and one comparison function per direction, so
//! the four numeric-range keywords need only one struct apiece (see
//! `DESIGN.md`).
use num_cmp::NumCmp;
use serde_json::Number;
use std::{cmp::Ordering, fmt};

#[derive(Clone, Copy, Debug)]
pub(crate) enum Limit {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl Limit {
    #[must_use]
    pub(crate) fn from_number(number: &Number) -> Limit {
        if let Some(value) = number.as_u64() {
            Limit::U64(value)
        } else if let Some(value) = number.as_i64() {
            Limit::I64(value)
        } else {
            Limit::F64(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::U64(value) => write!(f, "{}", value),
            Limit::I64(value) => write!(f, "{}", value),
            Limit::F64(value) => write!(f, "{}", value),
        }
    }
}

fn ordering(instance: Limit, limit: Limit) -> Option<Ordering> {
    match (instance, limit) {
        (Limit::U64(a), Limit::U64(b)) => NumCmp::num_cmp(a, b),
        (Limit::U64(a), Limit::I64(b)) => NumCmp::num_cmp(a, b),
        (Limit::U64(a), Limit::F64(b)) => NumCmp::num_cmp(a, b),
        (Limit::I64(a), Limit::U64(b)) => NumCmp::num_cmp(a, b),
        (Limit::I64(a), Limit::I64(b)) => NumCmp::num_cmp(a, b),
        (Limit::I64(a), Limit::F64(b)) => NumCmp::num_cmp(a, b),
        (Limit::F64(a), Limit::U64(b)) => NumCmp::num_cmp(a, b),
        (Limit::F64(a), Limit::I64(b)) => NumCmp::num_cmp(a, b),
        (Limit::F64(a), Limit::F64(b)) => NumCmp::num_cmp(a, b),
    }
}

/// `instance >= limit`. An instance that cannot be ordered against the limit
/// (e.g. a `NaN` produced from a non-finite JSON number) fails the check.
#[must_use]
pub(crate) fn num_ge(instance: &Number, limit: Limit) -> bool {
    matches!(ordering(Limit::from_number(instance), limit), Some(Ordering::Greater | Ordering::Equal))
}

#[must_use]
pub(crate) fn num_le(instance: &Number, limit: Limit) -> bool {
    matches!(ordering(Limit::from_number(instance), limit), Some(Ordering::Less | Ordering::Equal))
}

#[must_use]
pub(crate) fn num_gt(instance: &Number, limit: Limit) -> bool {
    matches!(ordering(Limit::from_number(instance), limit), Some(Ordering::Greater))
}

#[must_use]
pub(crate) fn num_lt(instance: &Number, limit: Limit) -> bool {
    matches!(ordering(Limit::from_number(instance), limit), Some(Ordering::Less))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_u64_compares_exactly_against_f64() {
        let huge = Number::from(u64::MAX);
        assert!(num_ge(&huge, Limit::F64((u64::MAX - 1) as f64)));
    }

    #[test]
    fn mixed_sign_representations_compare_correctly() {
        let negative = Number::from(-5_i64);
        assert!(num_lt(&negative, Limit::U64(0)));
    }
}
