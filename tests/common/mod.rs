//! Shared test doubles: non-contiguous cursors and an instrumented element.

#![allow(dead_code)]

use std::cell::Cell;

use tola_seq::category::{BidirectionalCursor, BidirectionalTag, Cursor, ForwardTag, ReadCursor, WriteCursor};

// =============================================================================
// Forward-only cursor over a singly linked list
// =============================================================================

pub struct Node<T> {
    pub value: T,
    next: *mut Node<T>,
}

/// Owns boxed nodes linked front to back.
pub struct List<T> {
    nodes: Vec<Box<Node<T>>>,
}

impl<T> List<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let mut nodes: Vec<Box<Node<T>>> = values
            .into_iter()
            .map(|value| Box::new(Node { value, next: std::ptr::null_mut() }))
            .collect();
        for i in (1..nodes.len()).rev() {
            let next: *mut Node<T> = &mut *nodes[i];
            nodes[i - 1].next = next;
        }
        Self { nodes }
    }

    pub fn begin(&mut self) -> ListCursor<T> {
        match self.nodes.first_mut() {
            Some(node) => ListCursor(&mut **node),
            None => self.end(),
        }
    }

    pub fn end(&self) -> ListCursor<T> {
        ListCursor(std::ptr::null_mut())
    }

    pub fn values(&self) -> Vec<&T> {
        self.nodes.iter().map(|node| &node.value).collect()
    }
}

pub struct ListCursor<T>(*mut Node<T>);

impl<T> Clone for ListCursor<T> {
    fn clone(&self) -> Self {
        ListCursor(self.0)
    }
}

impl<T> PartialEq for ListCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

unsafe impl<T> Cursor for ListCursor<T> {
    type Category = ForwardTag;
    type Value = T;
    type Difference = isize;

    fn step(&mut self) {
        self.0 = unsafe { (*self.0).next };
    }
}

impl<T> ReadCursor for ListCursor<T> {
    fn get(&self) -> *const T {
        unsafe { &raw const (*self.0).value }
    }
}

impl<T> WriteCursor for ListCursor<T> {
    fn get_mut(&self) -> *mut T {
        unsafe { &raw mut (*self.0).value }
    }
}

// =============================================================================
// Bidirectional, non-contiguous view of a buffer
// =============================================================================

/// Walks a buffer like a raw pointer but only claims bidirectional capability
/// and no contiguity, so algorithms take their stepwise paths.
pub struct Bidi<T>(pub *mut T);

impl<T> Clone for Bidi<T> {
    fn clone(&self) -> Self {
        Bidi(self.0)
    }
}

impl<T> PartialEq for Bidi<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

unsafe impl<T> Cursor for Bidi<T> {
    type Category = BidirectionalTag;
    type Value = T;
    type Difference = isize;

    fn step(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

impl<T> ReadCursor for Bidi<T> {
    fn get(&self) -> *const T {
        self.0
    }
}

impl<T> WriteCursor for Bidi<T> {
    fn get_mut(&self) -> *mut T {
        self.0
    }
}

impl<T> BidirectionalCursor for Bidi<T> {
    fn step_back(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }
}

/// `[first, last)` of a slice as `Bidi` cursors.
pub fn bidi<T>(slice: &mut [T]) -> (Bidi<T>, Bidi<T>) {
    let range = slice.as_mut_ptr_range();
    (Bidi(range.start), Bidi(range.end))
}

// =============================================================================
// Instrumented element
// =============================================================================

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Counts live instances per thread; cloning can be made to fail.
#[derive(Debug, PartialEq)]
pub struct Tracked(pub u32);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("clone of {0} refused")]
pub struct CloneRefused(pub u32);

impl Tracked {
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Tracked(value)
    }

    /// Live instances on this thread.
    pub fn live() -> isize {
        LIVE.with(Cell::get)
    }

    /// Let the next `n` clones succeed, then fail every later one.
    pub fn fail_after(n: usize) {
        CLONES_LEFT.with(|left| left.set(Some(n)));
    }

    pub fn never_fail() {
        CLONES_LEFT.with(|left| left.set(None));
    }

    fn permit() -> bool {
        CLONES_LEFT.with(|left| match left.get() {
            None => true,
            Some(0) => false,
            Some(n) => {
                left.set(Some(n - 1));
                true
            }
        })
    }

    pub fn try_clone(&self) -> Result<Self, CloneRefused> {
        if Self::permit() { Ok(Tracked::new(self.0)) } else { Err(CloneRefused(self.0)) }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(refused) => panic!("{refused}"),
        }
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Tracked::new(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

tola_seq::element!(Tracked);

pub fn tracked(values: impl IntoIterator<Item = u32>) -> Vec<Tracked> {
    values.into_iter().map(Tracked::new).collect()
}
