//! Constructed-prefix guard.

use crate::category::WriteCursor;
use crate::construct::{construct, destroy_n};

/// Tracks the constructed prefix `[start, start + count)` of a raw range.
///
/// `count` equals the number of live objects written so far at every point,
/// including while unwinding. Dropping the guard before [`finish`] destroys
/// that prefix, which covers panics; a typed failure rolls back eagerly in
/// [`try_push_with`].
///
/// [`finish`]: Constructed::finish
/// [`try_push_with`]: Constructed::try_push_with
pub(crate) struct Constructed<O: WriteCursor> {
    start: O,
    cursor: O,
    count: usize,
}

impl<O: WriteCursor> Constructed<O> {
    #[inline]
    pub(crate) fn new(start: O) -> Self {
        Self { cursor: start.clone(), start, count: 0 }
    }

    /// Write `value` at the next raw slot.
    ///
    /// # Safety
    ///
    /// The next slot is raw storage inside the destination range.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: O::Value) {
        // SAFETY: forwarded from the caller.
        unsafe { construct(self.cursor.get_mut(), value) };
        self.cursor.step();
        self.count += 1;
    }

    /// Construct the next slot from `make`; on `Err` roll back and return it.
    ///
    /// # Safety
    ///
    /// Same as [`push`](Self::push).
    #[inline]
    pub(crate) unsafe fn try_push_with<E, F>(&mut self, make: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<O::Value, E>,
    {
        match make() {
            Ok(value) => {
                // SAFETY: forwarded from the caller.
                unsafe { self.push(value) };
                Ok(())
            }
            Err(error) => {
                self.rollback();
                Err(error)
            }
        }
    }

    /// Commit the prefix and return the position after it.
    #[inline]
    pub(crate) fn finish(mut self) -> O {
        self.count = 0;
        self.cursor.clone()
    }

    fn rollback(&mut self) {
        if self.count == 0 {
            return;
        }
        trace!(destroyed = self.count, "rolling back partially constructed range");
        let count = core::mem::take(&mut self.count);
        // SAFETY: exactly `count` objects were constructed from `start`.
        unsafe { destroy_n(self.start.clone(), count) };
    }
}

impl<O: WriteCursor> Drop for Constructed<O> {
    fn drop(&mut self) {
        self.rollback();
    }
}
