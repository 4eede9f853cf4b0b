//! The seven JSON primitive types and a compact bitmap for sets of them.
//!
//! Grounded in `jsonschema::primitive_type`: the teacher represents the
//! admissible-type set computed by the `type` keyword as a bitmap rather
//! than a `HashSet`, since there are only seven possible members.
use serde_json::Value;
use std::{fmt, iter::FromIterator};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    Null,
    Boolean,
    String,
    Number,
    Integer,
    Array,
    Object,
}

impl PrimitiveType {
    pub(crate) const ALL: [PrimitiveType; 7] = [
        PrimitiveType::Null,
        PrimitiveType::Boolean,
        PrimitiveType::String,
        PrimitiveType::Number,
        PrimitiveType::Integer,
        PrimitiveType::Array,
        PrimitiveType::Object,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        Some(match name {
            "null" => PrimitiveType::Null,
            "boolean" => PrimitiveType::Boolean,
            "string" => PrimitiveType::String,
            "number" => PrimitiveType::Number,
            "integer" => PrimitiveType::Integer,
            "array" => PrimitiveType::Array,
            "object" => PrimitiveType::Object,
            _ => return None,
        })
    }

    /// The primitive type of a decoded JSON value. A whole-valued float
    /// (e.g. `1.0`) is considered `Integer` as well as `Number` by callers
    /// that check `PrimitiveTypesBitMap::contains`, not by this function,
    /// which always reports the literal JSON type.
    #[must_use]
    pub fn of(value: &Value) -> PrimitiveType {
        match value {
            Value::Null => PrimitiveType::Null,
            Value::Bool(_) => PrimitiveType::Boolean,
            Value::String(_) => PrimitiveType::String,
            Value::Array(_) => PrimitiveType::Array,
            Value::Object(_) => PrimitiveType::Object,
            Value::Number(number) => {
                if number.is_u64() || number.is_i64() {
                    PrimitiveType::Integer
                } else if number.as_f64().map_or(false, |value| value.fract() == 0.0) {
                    PrimitiveType::Integer
                } else {
                    PrimitiveType::Number
                }
            }
        }
    }

    const fn bit(self) -> u8 {
        match self {
            PrimitiveType::Null => 1 << 0,
            PrimitiveType::Boolean => 1 << 1,
            PrimitiveType::String => 1 << 2,
            PrimitiveType::Number => 1 << 3,
            PrimitiveType::Integer => 1 << 4,
            PrimitiveType::Array => 1 << 5,
            PrimitiveType::Object => 1 << 6,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveType::Null => "null",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Array => "array",
            PrimitiveType::Object => "object",
        })
    }
}

/// A set of `PrimitiveType` stored as a bitmap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimitiveTypesBitMap(u8);

impl PrimitiveTypesBitMap {
    #[must_use]
    pub fn new() -> Self {
        PrimitiveTypesBitMap(0)
    }

    #[must_use]
    pub fn all() -> Self {
        let mut set = PrimitiveTypesBitMap::new();
        for ty in PrimitiveType::ALL {
            set = set.insert(ty);
        }
        set
    }

    #[must_use]
    pub fn insert(mut self, ty: PrimitiveType) -> Self {
        self.0 |= ty.bit();
        self
    }

    #[must_use]
    pub fn contains(self, ty: PrimitiveType) -> bool {
        self.0 & ty.bit() != 0
    }

    /// A number whose JSON literal is a whole number satisfies both
    /// `"type": "integer"` and `"type": "number"` admission checks.
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        let actual = PrimitiveType::of(value);
        if self.contains(actual) {
            return true;
        }
        actual == PrimitiveType::Integer && self.contains(PrimitiveType::Number)
    }

    #[must_use]
    pub fn iter(self) -> impl Iterator<Item = PrimitiveType> {
        PrimitiveType::ALL.into_iter().filter(move |ty| self.contains(*ty))
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PrimitiveTypesBitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(|ty| ty.to_string()).collect();
        write!(f, "{}", names.join("/"))
    }
}

impl FromIterator<PrimitiveType> for PrimitiveTypesBitMap {
    fn from_iter<T: IntoIterator<Item = PrimitiveType>>(iter: T) -> Self {
        let mut set = PrimitiveTypesBitMap::new();
        for ty in iter {
            set = set.insert(ty);
        }
        set
    }
}
