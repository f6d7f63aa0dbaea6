//! Canonical JSON rendering and content digests.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

const INDENT: &[u8] = b"    ";

/// Render `mapping` with 4-space indentation, preserving key order.
///
/// Writing a `Map<String, Value>` into a `Vec` cannot fail: every key is a
/// string and in-memory writes never error. The compact `Display` form is
/// returned for that unreachable case, so rendering never panics.
pub(super) fn render(mapping: &Map<String, Value>) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    if mapping.serialize(&mut serializer).is_err() {
        return Value::Object(mapping.clone()).to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Hash `canonical` with SHA-256 and return the hex string.
pub(super) fn digest(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
