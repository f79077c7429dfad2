//! Set algebra over canonical operands.
//!
//! Every operation relies on both operands being strictly ascending and
//! walks them with forward-only scans. Nothing here re-validates input;
//! an `IntSet` can only come from `parse` or from another operation.

use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::canonical::CanonicalBuffer;
use crate::set::IntSet;

/// Outcome of [`resumable_contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Match found; `next` is the position just past it.
    Found { next: usize },
    /// No match; `resume` is the first position holding a greater
    /// element (or the length of the set). Later queries for larger
    /// values can restart there.
    Missing { resume: usize },
}

impl Scan {
    pub fn is_found(self) -> bool {
        matches!(self, Scan::Found { .. })
    }

    /// Where the next, larger query should start.
    pub fn resume_at(self) -> usize {
        match self {
            Scan::Found { next } => next,
            Scan::Missing { resume } => resume,
        }
    }
}

/// Bounded membership scan starting at `start`.
///
/// Stops at the first element not less than `x`, so a run of ascending
/// queries fed their previous [`Scan::resume_at`] costs O(n + m) overall.
pub fn resumable_contains(set: &IntSet, x: i32, start: usize) -> Scan {
    let elems = set.as_slice();
    let start = start.min(elems.len());
    for (i, &elem) in elems.iter().enumerate().skip(start) {
        if x < elem {
            return Scan::Missing { resume: i };
        }
        if x == elem {
            return Scan::Found { next: i + 1 };
        }
    }
    Scan::Missing {
        resume: elems.len(),
    }
}

/// Forward-only membership cursor over one set. Queries must arrive in
/// ascending order.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    set: &'a IntSet,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(set: &'a IntSet) -> Self {
        Self { set, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, x: i32) -> bool {
        let scan = resumable_contains(self.set, x, self.pos);
        self.pos = scan.resume_at();
        scan.is_found()
    }
}

pub fn cardinality(set: &IntSet) -> usize {
    set.len()
}

pub fn contains(set: &IntSet, x: i32) -> bool {
    resumable_contains(set, x, 0).is_found()
}

/// True when every element of `a` is in `b`. The empty set is a subset
/// of everything.
pub fn is_subset_of(a: &IntSet, b: &IntSet) -> bool {
    if a.is_empty() {
        return true;
    }
    if a.len() > b.len() {
        return false;
    }
    let mut cursor = Cursor::new(b);
    a.iter().all(|x| cursor.seek(x))
}

pub fn is_superset_of(a: &IntSet, b: &IntSet) -> bool {
    is_subset_of(b, a)
}

/// Canonical forms are unique, so element-wise equality is encoding equality.
pub fn equals(a: &IntSet, b: &IntSet) -> bool {
    a.as_slice() == b.as_slice()
}

pub fn not_equals(a: &IntSet, b: &IntSet) -> bool {
    !equals(a, b)
}

/// Pick (longer, shorter) by encoded length; ties go to `b` first.
fn by_encoded_len<'a>(a: &'a IntSet, b: &'a IntSet) -> (&'a IntSet, &'a IntSet) {
    if a.encoded_len() > b.encoded_len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Start from the longer operand and insert the shorter one's elements.
pub fn union(a: &IntSet, b: &IntSet) -> IntSet {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    let (x, y) = by_encoded_len(a, b);
    let mut buffer = CanonicalBuffer::from_set(x);
    let mut hint = 0;
    for token in y {
        hint = buffer.insert_from(hint, token).index() + 1;
    }
    buffer.finish()
}

pub fn intersect(a: &IntSet, b: &IntSet) -> IntSet {
    if a.is_empty() || b.is_empty() {
        return IntSet::empty();
    }
    let (x, y) = by_encoded_len(a, b);
    let mut cursor = Cursor::new(x);
    let mut buffer = CanonicalBuffer::with_capacity(y.len());
    for token in y {
        if cursor.seek(token) {
            buffer.push_ascending(token);
        }
    }
    buffer.finish()
}

/// Elements of `a` absent from `b`.
///
/// `difference({}, b)` is `{}` and `difference(a, {})` is `a`.
pub fn difference(a: &IntSet, b: &IntSet) -> IntSet {
    if a.is_empty() {
        return IntSet::empty();
    }
    if b.is_empty() {
        return a.clone();
    }
    let mut cursor = Cursor::new(b);
    let mut buffer = CanonicalBuffer::with_capacity(a.len());
    for token in a {
        if !cursor.seek(token) {
            buffer.push_ascending(token);
        }
    }
    buffer.finish()
}

pub fn symmetric_difference(a: &IntSet, b: &IntSet) -> IntSet {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    let left = difference(a, b);
    let right = difference(b, a);
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }
    union(&left, &right)
}

impl IntSet {
    pub fn contains(&self, x: i32) -> bool {
        contains(self, x)
    }

    pub fn is_subset_of(&self, other: &IntSet) -> bool {
        is_subset_of(self, other)
    }

    pub fn is_superset_of(&self, other: &IntSet) -> bool {
        is_superset_of(self, other)
    }

    pub fn union(&self, other: &IntSet) -> IntSet {
        union(self, other)
    }

    pub fn intersect(&self, other: &IntSet) -> IntSet {
        intersect(self, other)
    }

    pub fn difference(&self, other: &IntSet) -> IntSet {
        difference(self, other)
    }

    pub fn symmetric_difference(&self, other: &IntSet) -> IntSet {
        symmetric_difference(self, other)
    }
}

impl BitOr for &IntSet {
    type Output = IntSet;

    fn bitor(self, rhs: &IntSet) -> IntSet {
        union(self, rhs)
    }
}

impl BitAnd for &IntSet {
    type Output = IntSet;

    fn bitand(self, rhs: &IntSet) -> IntSet {
        intersect(self, rhs)
    }
}

impl Sub for &IntSet {
    type Output = IntSet;

    fn sub(self, rhs: &IntSet) -> IntSet {
        difference(self, rhs)
    }
}

impl BitXor for &IntSet {
    type Output = IntSet;

    fn bitxor(self, rhs: &IntSet) -> IntSet {
        symmetric_difference(self, rhs)
    }
}
