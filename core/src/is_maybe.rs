//! Capability check for `Maybe` values crossing an untyped (JSON) boundary.

use serde_json::{Map, Value};

use crate::maybe::{KIND_TAG, Kind, VALUE_FIELD};

/// Check if `value` is a serialized [`Maybe`](crate::Maybe).
///
/// True for `{"_kind":"None"}` and for `{"_kind":"Some","value":...}`. Any
/// other JSON, including `null`, is not a `Maybe`. Never panics.
#[must_use]
pub fn is_maybe(value: &Value) -> bool {
    value.as_object().and_then(decode_kind).is_some()
}

/// The variant a JSON object encodes, if it is a well-formed serialized `Maybe`.
pub(crate) fn decode_kind(fields: &Map<String, Value>) -> Option<Kind> {
    let kind = fields.get(KIND_TAG)?.as_str().and_then(Kind::parse)?;
    match kind {
        Kind::None => Some(kind),
        Kind::Some => fields.contains_key(VALUE_FIELD).then_some(kind),
    }
}
