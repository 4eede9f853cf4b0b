//! The `format` keyword's registry of named string checks.
//!
//! Grounded in `jsonschema::keywords::format`: a blanket `Format` impl over
//! `Fn(&str) -> bool` closures, plus built-in validators for `date-time`,
//! `date`, `time`, `ipv4`, `ipv6` registered by name in a map that
//! `CompilationOptions::with_format`/`without_format` can override, matching
//! `jsonschema::compilation::options::CompilationOptions::with_format`.
use ahash::AHashMap;
use std::{fmt, net::IpAddr, str::FromStr, sync::Arc};
use time::format_description::well_known::Rfc3339;

pub trait Format: Send + Sync + fmt::Debug {
    fn is_valid(&self, value: &str) -> bool;
}

impl<F> Format for F
where
    F: Fn(&str) -> bool + Send + Sync + fmt::Debug,
{
    fn is_valid(&self, value: &str) -> bool {
        self(value)
    }
}

fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || !bytes[..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..7].iter().all(u8::is_ascii_digit)
        || !bytes[8..10].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    let year: u16 = value[0..4].parse().expect("checked digits");
    let month: u8 = value[5..7].parse().expect("checked digits");
    let day: u8 = value[8..10].parse().expect("checked digits");
    if !(1..=12).contains(&month) {
        return false;
    }
    let is_leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap => 29,
        2 => 28,
        _ => unreachable!(),
    };
    (1..=days_in_month).contains(&day)
}

#[derive(Debug)]
struct DateTimeCheck {
    require_utc: bool,
}

impl Format for DateTimeCheck {
    fn is_valid(&self, value: &str) -> bool {
        match time::OffsetDateTime::parse(value, &Rfc3339) {
            Ok(_) => !self.require_utc || value.ends_with('Z') || value.ends_with('z'),
            Err(_) => false,
        }
    }
}

fn is_valid_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    let len = bytes.len();
    if len < 9 {
        return false; // minimum valid time is "HH:MM:SSZ"
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || bytes[2] != b':'
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
        || bytes[5] != b':'
        || !bytes[6].is_ascii_digit()
        || !bytes[7].is_ascii_digit()
    {
        return false;
    }
    let hh = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let mm = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    let ss = (bytes[6] - b'0') * 10 + (bytes[7] - b'0');
    if hh > 23 || mm > 59 || ss > 60 {
        return false;
    }
    let mut i = 8;
    if i < len && bytes[i] == b'.' {
        i += 1;
        let start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    if i == len {
        return false; // offset is mandatory
    }
    if bytes[i] == b'Z' || bytes[i] == b'z' {
        return i + 1 == len;
    }
    if bytes[i] != b'+' && bytes[i] != b'-' {
        return false;
    }
    let rest = &bytes[i + 1..];
    rest.len() == 5
        && rest[0].is_ascii_digit()
        && rest[1].is_ascii_digit()
        && rest[2] == b':'
        && rest[3].is_ascii_digit()
        && rest[4].is_ascii_digit()
}

fn is_valid_ipv4(value: &str) -> bool {
    matches!(IpAddr::from_str(value), Ok(IpAddr::V4(_)))
}

fn is_valid_ipv6(value: &str) -> bool {
    matches!(IpAddr::from_str(value), Ok(IpAddr::V6(_)))
}

/// The set of format checks available during compilation, keyed by format
/// name. `None` marks a format as explicitly disabled (`with_format(name,
/// false)` in `spec.md` §4.5 terms).
#[derive(Clone)]
pub struct FormatRegistry {
    entries: AHashMap<String, Option<Arc<dyn Format>>>,
    validate_by_default: bool,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .field("validate_by_default", &self.validate_by_default)
            .finish()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut entries: AHashMap<String, Option<Arc<dyn Format>>> = AHashMap::default();
        entries.insert("date".to_string(), Some(Arc::new(is_valid_date as fn(&str) -> bool)));
        entries.insert(
            "date-time".to_string(),
            Some(Arc::new(DateTimeCheck { require_utc: false })),
        );
        entries.insert("time".to_string(), Some(Arc::new(is_valid_time as fn(&str) -> bool)));
        entries.insert("ipv4".to_string(), Some(Arc::new(is_valid_ipv4 as fn(&str) -> bool)));
        entries.insert("ipv6".to_string(), Some(Arc::new(is_valid_ipv6 as fn(&str) -> bool)));
        FormatRegistry { entries, validate_by_default: true }
    }
}

impl FormatRegistry {
    #[must_use]
    pub fn new() -> Self {
        FormatRegistry::default()
    }

    /// Register or replace the check for `name`.
    pub fn with_format(mut self, name: impl Into<String>, format: impl Format + 'static) -> Self {
        self.entries.insert(name.into(), Some(Arc::new(format)));
        self
    }

    /// Disable the named format: `format` keywords naming it always pass.
    pub fn without_format(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// `date-time` with the `utc` option: reject offsets other than `Z`.
    pub fn require_utc_date_time(mut self) -> Self {
        self.entries.insert("date-time".to_string(), Some(Arc::new(DateTimeCheck { require_utc: true })));
        self
    }

    pub(crate) fn disable_by_default(mut self) -> Self {
        self.validate_by_default = false;
        self
    }

    pub(crate) fn validates_by_default(&self) -> bool {
        self.validate_by_default
    }

    /// `Some(Some(check))` — a known, enabled format; `Some(None)` — known
    /// but disabled (always passes); `None` — unknown name (ignored, per
    /// `spec.md`'s silence on unrecognized format names).
    pub(crate) fn get(&self, name: &str) -> Option<Option<&Arc<dyn Format>>> {
        self.entries.get(name).map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_accepts_offset_by_default() {
        let formats = FormatRegistry::new();
        let check = formats.get("date-time").unwrap().unwrap();
        assert!(check.is_valid("2021-01-01T12:00:00+02:00"));
    }

    #[test]
    fn date_time_utc_rejects_offset() {
        let formats = FormatRegistry::new().require_utc_date_time();
        let check = formats.get("date-time").unwrap().unwrap();
        assert!(!check.is_valid("2021-01-01T12:00:00+02:00"));
        assert!(check.is_valid("2021-01-01T12:00:00Z"));
    }

    #[test]
    fn ipv4_rejects_ipv6() {
        assert!(is_valid_ipv4("127.0.0.1"));
        assert!(!is_valid_ipv4("::1"));
    }

    #[test]
    fn disabled_format_is_none() {
        let formats = FormatRegistry::new().without_format("ipv6");
        assert!(formats.get("ipv6").unwrap().is_none());
    }
}
