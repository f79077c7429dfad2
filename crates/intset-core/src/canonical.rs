//! Insertion engine: keeps a growable buffer strictly ascending and
//! duplicate-free while a set is being built.

use crate::set::IntSet;

/// Result of a single [`CanonicalBuffer::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The token was placed at this index.
    Inserted(usize),
    /// An equal element was already present; the token was dropped.
    Duplicate(usize),
}

impl Insertion {
    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }

    /// Index of the element equal to the token after the call.
    pub fn index(self) -> usize {
        match self {
            Insertion::Inserted(i) | Insertion::Duplicate(i) => i,
        }
    }
}

/// Working buffer owned by a single construction. Finished with
/// [`CanonicalBuffer::finish`] into an immutable [`IntSet`].
#[derive(Clone, Debug, Default)]
pub struct CanonicalBuffer {
    elems: Vec<i32>,
}

impl CanonicalBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Seed the buffer with the elements of an existing set.
    pub fn from_set(set: &IntSet) -> Self {
        Self {
            elems: set.as_slice().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.elems
    }

    /// Insert with a left-to-right scan over the whole buffer.
    /// First strictly greater element wins the insertion point; an equal
    /// element makes the call a no-op.
    pub fn insert(&mut self, token: i32) -> Insertion {
        self.insert_from(0, token)
    }

    /// Same as [`insert`](Self::insert) but the scan starts at `hint`.
    ///
    /// Every element before `hint` must be strictly less than `token`.
    /// Feeding ascending tokens with the previous result's `index() + 1`
    /// as hint makes a whole fold linear.
    pub fn insert_from(&mut self, hint: usize, token: i32) -> Insertion {
        let start = hint.min(self.elems.len());
        debug_assert!(self.elems[..start].iter().all(|&e| e < token));
        for i in start..self.elems.len() {
            let current = self.elems[i];
            if token < current {
                self.elems.insert(i, token);
                return Insertion::Inserted(i);
            }
            if token == current {
                return Insertion::Duplicate(i);
            }
        }
        self.elems.push(token);
        Insertion::Inserted(self.elems.len() - 1)
    }

    /// Append a token known to exceed every element already present.
    pub(crate) fn push_ascending(&mut self, token: i32) {
        debug_assert!(self.elems.last().is_none_or(|&last| last < token));
        self.elems.push(token);
    }

    pub fn finish(self) -> IntSet {
        IntSet::from_canonical(self.elems)
    }
}

/// Fold [`CanonicalBuffer::insert`] over tokens, starting from the empty set.
pub fn canonicalize<I>(tokens: I) -> IntSet
where
    I: IntoIterator<Item = i32>,
{
    let tokens = tokens.into_iter();
    let mut buffer = CanonicalBuffer::with_capacity(tokens.size_hint().0);
    for token in tokens {
        buffer.insert(token);
    }
    buffer.finish()
}
