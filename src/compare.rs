//! Deep, type-exact structural equality.
//!
//! Composites compare child by child in position order. Keys never take
//! part, so two objects holding the same pairs in a different order are
//! unequal.

use crate::arena::NodeKind;
use crate::types::ValueRef;

pub fn equal(a: ValueRef<'_, '_>, b: ValueRef<'_, '_>) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match a.kind() {
        NodeKind::Null => true,
        NodeKind::Array | NodeKind::Object => {
            a.len() == b.len() && a.children().zip(b.children()).all(|(x, y)| equal(x, y))
        }
        NodeKind::Number => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.int == y.int && x.float == y.float,
            _ => false,
        },
        NodeKind::String => a.as_bytes() == b.as_bytes(),
        NodeKind::Boolean => a.as_bool() == b.as_bool(),
    }
}

impl<'b, 'src2> PartialEq<ValueRef<'b, 'src2>> for ValueRef<'_, '_> {
    fn eq(&self, other: &ValueRef<'b, 'src2>) -> bool {
        equal(*self, *other)
    }
}
