pub mod writer;

use std::fmt;

use crate::arena::NodeKind;
use crate::num::number::format_number;
use crate::types::ValueRef;

pub use writer::{BoundedWriter, Sink};

use writer::FmtSink;

/// Serializes `value` into `sink`.
///
/// Strings and keys are written between double quotes exactly as they
/// appeared in the source; nothing is escaped.
pub fn write_value<S: Sink + ?Sized>(value: ValueRef<'_, '_>, sink: &mut S) {
    match value.kind() {
        NodeKind::Null => sink.append(b"null"),
        NodeKind::Boolean => {
            if value.as_bool().unwrap_or_default() {
                sink.append(b"true");
            } else {
                sink.append(b"false");
            }
        }
        NodeKind::Number => {
            if let Some(number) = value.as_number() {
                sink.append(format_number(&number).as_bytes());
            }
        }
        NodeKind::String => write_quoted(value.as_bytes().unwrap_or_default(), sink),
        NodeKind::Array => {
            sink.append(b"[");
            for entry in value.entries() {
                write_value(entry.value, sink);
                if !entry.is_last() {
                    sink.append(b", ");
                }
            }
            sink.append(b"]");
        }
        NodeKind::Object => {
            sink.append(b"{");
            for entry in value.entries() {
                write_quoted(entry.key, sink);
                sink.append(b": ");
                write_value(entry.value, sink);
                if !entry.is_last() {
                    sink.append(b", ");
                }
            }
            sink.append(b"}");
        }
    }
}

fn write_quoted<S: Sink + ?Sized>(bytes: &[u8], sink: &mut S) {
    sink.append(b"\"");
    sink.append(bytes);
    sink.append(b"\"");
}

/// Writes as much of `value` as fits into `dst`, NUL-terminates inside the
/// buffer, and returns the full length the output needs (terminator
/// excluded). A return value `>= dst.len()` means the output was cut short.
pub fn write_to_slice(value: ValueRef<'_, '_>, dst: &mut [u8]) -> usize {
    let mut writer = BoundedWriter::new(dst);
    write_value(value, &mut writer);
    writer.finish()
}

pub fn to_vec(value: ValueRef<'_, '_>) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

/// Like [`to_vec`]; string bytes that are not UTF-8 are replaced.
pub fn to_string(value: ValueRef<'_, '_>) -> String {
    match String::from_utf8(to_vec(value)) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

impl fmt::Display for ValueRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        write_value(*self, &mut sink);
        sink.finish()
    }
}
