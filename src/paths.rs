//! JSON Pointer (RFC 6901) values used to locate positions inside a schema
//! document (`Pointer`, fixed at compile time) and inside an instance being
//! validated (`InstancePath`, grown and shrunk at validation time).
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::{cell::RefCell, fmt};

const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\');

/// One segment of a JSON Pointer: either an object key or an array index.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PathChunk {
    Name(String),
    Index(usize),
}

impl fmt::Display for PathChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathChunk::Name(name) => f.write_str(name),
            PathChunk::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<String> for PathChunk {
    fn from(value: String) -> Self {
        PathChunk::Name(value)
    }
}
impl From<&str> for PathChunk {
    fn from(value: &str) -> Self {
        PathChunk::Name(value.to_string())
    }
}
impl From<usize> for PathChunk {
    fn from(value: usize) -> Self {
        PathChunk::Index(value)
    }
}

/// A resolved JSON Pointer, i.e. a sequence of segments. The empty sequence
/// is the document root.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pointer(Vec<PathChunk>);

impl Pointer {
    #[must_use]
    pub fn root() -> Self {
        Pointer(Vec::new())
    }

    /// Parse `"/a/b/0"`, `"#/a/b/0"`, `"#"` or `"/"` into a pointer.
    /// `~0` unescapes to `~`, `~1` unescapes to `/`.
    #[must_use]
    pub fn from_uri(value: &str) -> Self {
        let value = value.strip_prefix('#').unwrap_or(value);
        if value.is_empty() {
            return Pointer::root();
        }
        let segments = value
            .split('/')
            .skip(1)
            .map(|segment| {
                let decoded = percent_decode_str(segment)
                    .decode_utf8()
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| segment.to_string());
                let segment = decoded.replace("~1", "/").replace("~0", "~");
                if let Ok(index) = segment.parse::<usize>() {
                    if !segment.starts_with('0') || segment == "0" {
                        return PathChunk::Index(index);
                    }
                }
                PathChunk::Name(segment)
            })
            .collect();
        Pointer(segments)
    }

    /// Render as a `"#/a/b/0"` URI fragment, with RFC 6901 escaping.
    #[must_use]
    pub fn to_uri(&self) -> String {
        let mut out = String::from("#");
        for chunk in &self.0 {
            out.push('/');
            let escaped = chunk.to_string().replace('~', "~0").replace('/', "~1");
            out.push_str(&utf8_percent_encode(&escaped, FRAGMENT).to_string());
        }
        out
    }

    /// A stable, injective identifier for `(authority, self)`, used as the
    /// registry key and as the only name by which generated validators are
    /// known to each other.
    #[must_use]
    pub fn to_fun_id(&self, authority: &str) -> String {
        let mut id = authority.to_string();
        id.push('#');
        for chunk in &self.0 {
            id.push('/');
            id.push_str(&chunk.to_string());
        }
        id
    }

    /// Append one (already-unescaped) segment, returning the extended pointer.
    #[must_use]
    pub fn join(&self, segment: impl Into<PathChunk>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Pointer(segments)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PathChunk] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().map(|chunk| chunk.to_string()).collect()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl From<&[PathChunk]> for Pointer {
    fn from(chunks: &[PathChunk]) -> Self {
        Pointer(chunks.to_vec())
    }
}

/// The runtime counterpart of `Pointer`: a stack of segments pushed while
/// descending into an instance, popped on the way back out. Kept behind a
/// `RefCell` so that sibling filter checks can share one stack without
/// threading `&mut` through every `validate` call, matching how the teacher
/// crate threads its own `InstancePath`.
#[derive(Debug, Default)]
pub struct InstancePath(RefCell<Vec<PathChunk>>);

impl InstancePath {
    #[must_use]
    pub fn new() -> Self {
        InstancePath(RefCell::new(Vec::new()))
    }

    pub fn push(&self, segment: impl Into<PathChunk>) -> InstancePathGuard<'_> {
        self.0.borrow_mut().push(segment.into());
        InstancePathGuard(self)
    }

    fn pop(&self) {
        self.0.borrow_mut().pop();
    }

    #[must_use]
    pub fn to_pointer(&self) -> Pointer {
        Pointer(self.0.borrow().clone())
    }
}

/// RAII guard returned by `InstancePath::push`; pops the segment on drop so
/// a filter cannot forget to unwind the path on an early return.
pub struct InstancePathGuard<'a>(&'a InstancePath);

impl Drop for InstancePathGuard<'_> {
    fn drop(&mut self) {
        self.0.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "#")]
    #[test_case("#", "#")]
    #[test_case("/a/b/0", "#/a/b/0")]
    #[test_case("#/a/b/0", "#/a/b/0")]
    fn round_trip(input: &str, expected_uri: &str) {
        let pointer = Pointer::from_uri(input);
        assert_eq!(pointer.to_uri(), expected_uri);
        assert_eq!(Pointer::from_uri(&pointer.to_uri()), pointer);
    }

    #[test]
    fn escapes_tilde_and_slash() {
        let pointer = Pointer::root().join("a/b").join("c~d");
        assert_eq!(pointer.to_uri(), "#/a~1b/c~0d");
        assert_eq!(Pointer::from_uri(&pointer.to_uri()), pointer);
    }

    #[test]
    fn percent_encodes_caret() {
        let pointer = Pointer::root().join("^S_");
        assert_eq!(pointer.to_uri(), "#/%5ES_");
    }

    #[test]
    fn fun_id_is_injective_across_authorities() {
        let a = Pointer::root().join("properties").to_fun_id("a");
        let b = Pointer::root().join("properties").to_fun_id("b");
        assert_ne!(a, b);
    }

    #[test]
    fn instance_path_unwinds_on_drop() {
        let path = InstancePath::new();
        {
            let _guard = path.push("a");
            assert_eq!(path.to_pointer().to_uri(), "#/a");
        }
        assert_eq!(path.to_pointer().to_uri(), "#");
    }
}
