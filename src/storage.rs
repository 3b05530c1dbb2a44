//! # Layer 6: Raw Storage
//!
//! Acquire and release blocks of uninitialized slots. Nothing in
//! [`crate::algo`] or [`crate::uninit`] calls a provider; containers pair a
//! [`RawBlock`] with those layers themselves.
//!
//! ```
//! use tola_seq::storage::RawBlock;
//! use tola_seq::uninit::uninitialized_fill_n;
//!
//! let block = RawBlock::<String>::new(3)?;
//! unsafe {
//!     let end = uninitialized_fill_n(block.begin(), 3, &"x".to_string());
//!     assert_eq!(end, block.end());
//!     tola_seq::construct::destroy_range(block.begin(), block.end());
//! }
//! # Ok::<(), tola_seq::storage::StorageError>(())
//! ```

use core::ptr::NonNull;

use thiserror::Error;

/// Failure to obtain a raw block.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// `count * size` does not fit the address space.
    #[error("capacity overflow: {count} elements of {size} bytes")]
    CapacityOverflow { count: usize, size: usize },
    /// The provider has no memory left for the request.
    #[error("out of memory: failed to acquire {bytes} bytes")]
    OutOfMemory { bytes: usize },
}

/// A provider of raw, uninitialized element slots.
///
/// # Safety
///
/// A successful `acquire::<T>(count)` returns a pointer aligned for `T` and
/// valid for reads and writes of `count` elements until it is released with
/// the same `T` and `count`.
pub unsafe trait RawStorage {
    fn acquire<T>(&self, count: usize) -> Result<NonNull<T>, StorageError>;

    /// # Safety
    ///
    /// `block` came from `acquire::<T>(count)` on this provider and is
    /// released once.
    unsafe fn release<T>(&self, block: NonNull<T>, count: usize);
}

#[cfg(feature = "alloc")]
pub use global::{Global, RawBlock};

#[cfg(feature = "alloc")]
mod global {
    use alloc::alloc::{Layout, alloc, dealloc};
    use core::marker::PhantomData;
    use core::ptr::NonNull;

    use super::{RawStorage, StorageError};

    /// The global allocator.
    ///
    /// Zero-byte requests never reach the allocator and return a dangling,
    /// aligned pointer.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Global;

    fn layout<T>(count: usize) -> Result<Layout, StorageError> {
        Layout::array::<T>(count).map_err(|_| StorageError::CapacityOverflow {
            count,
            size: size_of::<T>(),
        })
    }

    unsafe impl RawStorage for Global {
        fn acquire<T>(&self, count: usize) -> Result<NonNull<T>, StorageError> {
            let layout = layout::<T>(count)?;
            if layout.size() == 0 {
                return Ok(NonNull::dangling());
            }
            // SAFETY: non-zero size.
            let raw = unsafe { alloc(layout) };
            let block = NonNull::new(raw.cast::<T>())
                .ok_or(StorageError::OutOfMemory { bytes: layout.size() })?;
            debug!(bytes = layout.size(), count, "acquired raw block");
            Ok(block)
        }

        unsafe fn release<T>(&self, block: NonNull<T>, count: usize) {
            let Ok(layout) = layout::<T>(count) else { return };
            if layout.size() == 0 {
                return;
            }
            debug!(bytes = layout.size(), count, "released raw block");
            // SAFETY: same layout as the matching `acquire` (caller).
            unsafe { dealloc(block.as_ptr().cast::<u8>(), layout) }
        }
    }

    /// `count` uninitialized slots owned for their lifetime.
    ///
    /// Dropping the block releases the memory but never drops elements:
    /// destroy whatever was constructed first.
    #[derive(Debug)]
    pub struct RawBlock<T, S: RawStorage = Global> {
        ptr: NonNull<T>,
        count: usize,
        storage: S,
        _owns: PhantomData<T>,
    }

    impl<T> RawBlock<T> {
        /// Acquire `count` slots from the global allocator.
        pub fn new(count: usize) -> Result<Self, StorageError> {
            Self::new_in(count, Global)
        }
    }

    impl<T, S: RawStorage> RawBlock<T, S> {
        pub fn new_in(count: usize, storage: S) -> Result<Self, StorageError> {
            let ptr = storage.acquire::<T>(count)?;
            Ok(Self { ptr, count, storage, _owns: PhantomData })
        }

        #[inline]
        pub fn as_mut_ptr(&mut self) -> *mut T {
            self.ptr.as_ptr()
        }

        /// Cursor at the first slot.
        #[inline]
        pub fn begin(&self) -> *mut T {
            self.ptr.as_ptr()
        }

        /// Cursor one past the last slot.
        #[inline]
        pub fn end(&self) -> *mut T {
            self.ptr.as_ptr().wrapping_add(self.count)
        }

        #[inline]
        pub fn capacity(&self) -> usize {
            self.count
        }
    }

    impl<T, S: RawStorage> Drop for RawBlock<T, S> {
        fn drop(&mut self) {
            // SAFETY: acquired in `new_in` with this count.
            unsafe { self.storage.release(self.ptr, self.count) }
        }
    }
}
