use std::fmt;

use crate::arena::{Arena, Node, NodeData, NodeId, NodeKind};
use crate::num::Number;

use super::iter::{Children, Entries};

/// Borrowed view of one node of a parsed document.
///
/// `'a` is the arena borrow, `'src` the source buffer the strings and keys
/// point into. The view is `Copy`; all accessors are read-only.
#[derive(Clone, Copy)]
pub struct ValueRef<'a, 'src> {
    arena: &'a Arena<'src>,
    id: NodeId,
}

impl<'a, 'src> ValueRef<'a, 'src> {
    pub(crate) fn new(arena: &'a Arena<'src>, id: NodeId) -> Self {
        Self { arena, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<'src> {
        self.arena.node(self.id)
    }

    pub(crate) fn child_ids(&self) -> &'a [NodeId] {
        self.arena.child_ids(self.node())
    }

    pub(crate) fn arena(&self) -> &'a Arena<'src> {
        self.arena
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    /// Key under which this value sits in its parent object; empty for
    /// array elements and the root.
    pub fn key(&self) -> &'src [u8] {
        self.node().key
    }

    pub fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    pub fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }

    pub fn is_number(&self) -> bool {
        self.kind() == NodeKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind() == NodeKind::String
    }

    pub fn is_boolean(&self) -> bool {
        self.kind() == NodeKind::Boolean
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.node().data {
            NodeData::Bool(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self.node().data {
            NodeData::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().map(|number| number.int)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|number| number.float)
    }

    /// Raw string bytes, borrowed from the source buffer.
    pub fn as_bytes(&self) -> Option<&'src [u8]> {
        match self.node().data {
            NodeData::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'src str> {
        self.as_bytes()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Child count of a composite; zero for scalars.
    pub fn len(&self) -> usize {
        self.node().child_len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First child of an object whose key equals `key` byte for byte.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<ValueRef<'a, 'src>> {
        if !self.is_object() {
            return None;
        }
        let key = key.as_ref();
        self.children().find(|child| child.key() == key)
    }

    /// Child at `index` of an array or object.
    pub fn get_index(&self, index: usize) -> Option<ValueRef<'a, 'src>> {
        self.child_ids()
            .get(index)
            .map(|id| ValueRef::new(self.arena, *id))
    }

    pub fn entries(&self) -> Entries<'a, 'src> {
        Entries::new(*self)
    }

    pub fn children(&self) -> Children<'a, 'src> {
        Children::new(*self)
    }
}

impl fmt::Debug for ValueRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NodeKind::Null => f.write_str("Null"),
            NodeKind::Boolean => f
                .debug_tuple("Boolean")
                .field(&self.as_bool().unwrap_or_default())
                .finish(),
            NodeKind::Number => {
                let number = self.as_number().unwrap_or(Number::from_i64(0));
                f.debug_tuple("Number")
                    .field(&number.int)
                    .field(&number.float)
                    .finish()
            }
            NodeKind::String => f
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(self.as_bytes().unwrap_or_default()))
                .finish(),
            NodeKind::Array => f.debug_list().entries(self.children()).finish(),
            NodeKind::Object => f
                .debug_map()
                .entries(
                    self.entries()
                        .map(|entry| (String::from_utf8_lossy(entry.key), entry.value)),
                )
                .finish(),
        }
    }
}
