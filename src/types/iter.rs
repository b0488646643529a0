use std::iter::FusedIterator;

use crate::arena::NodeId;

use super::value::ValueRef;

/// One step of a walk over a composite: position, key and child.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a, 'src> {
    pub index: usize,
    /// Empty for array elements.
    pub key: &'src [u8],
    pub value: ValueRef<'a, 'src>,
    len: usize,
}

impl Entry<'_, '_> {
    /// True when no sibling follows this entry.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

/// Single-pass cursor over the children of a composite, in insertion order.
/// Scalars yield nothing. Start over by asking the value for a new cursor.
#[derive(Debug, Clone)]
pub struct Entries<'a, 'src> {
    parent: ValueRef<'a, 'src>,
    ids: &'a [NodeId],
    next: usize,
}

impl<'a, 'src> Entries<'a, 'src> {
    pub(crate) fn new(parent: ValueRef<'a, 'src>) -> Self {
        Self {
            parent,
            ids: parent.child_ids(),
            next: 0,
        }
    }
}

impl<'a, 'src> Iterator for Entries<'a, 'src> {
    type Item = Entry<'a, 'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.get(self.next)?;
        let value = ValueRef::new(self.parent.arena(), id);
        let entry = Entry {
            index: self.next,
            key: value.key(),
            value,
            len: self.ids.len(),
        };
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ids.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries<'_, '_> {}

impl FusedIterator for Entries<'_, '_> {}

/// Values-only view of [`Entries`].
#[derive(Debug, Clone)]
pub struct Children<'a, 'src> {
    inner: Entries<'a, 'src>,
}

impl<'a, 'src> Children<'a, 'src> {
    pub(crate) fn new(parent: ValueRef<'a, 'src>) -> Self {
        Self {
            inner: Entries::new(parent),
        }
    }
}

impl<'a, 'src> Iterator for Children<'a, 'src> {
    type Item = ValueRef<'a, 'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Children<'_, '_> {}

impl FusedIterator for Children<'_, '_> {}
