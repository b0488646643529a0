use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::arena::NodeKind;
use crate::types::ValueRef;

/// Integral numbers serialize as `i64`, the rest as `f64`. Strings that are
/// not UTF-8 serialize as bytes. Objects keep duplicate keys, in order.
impl Serialize for ValueRef<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.kind() {
            NodeKind::Null => serializer.serialize_unit(),
            NodeKind::Boolean => serializer.serialize_bool(self.as_bool().unwrap_or_default()),
            NodeKind::Number => match self.as_number() {
                Some(number) if number.is_integral() => serializer.serialize_i64(number.int),
                Some(number) => serializer.serialize_f64(number.float),
                None => serializer.serialize_unit(),
            },
            NodeKind::String => {
                let bytes = self.as_bytes().unwrap_or_default();
                match std::str::from_utf8(bytes) {
                    Ok(text) => serializer.serialize_str(text),
                    Err(_) => serializer.serialize_bytes(bytes),
                }
            }
            NodeKind::Array => {
                let mut seq = serializer.serialize_seq(Some(self.len()))?;
                for child in self.children() {
                    seq.serialize_element(&child)?;
                }
                seq.end()
            }
            NodeKind::Object => {
                let mut map = serializer.serialize_map(Some(self.len()))?;
                for entry in self.entries() {
                    map.serialize_entry(&String::from_utf8_lossy(entry.key), &entry.value)?;
                }
                map.end()
            }
        }
    }
}
