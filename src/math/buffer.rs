//! Owned, growable storage for matrix elements.
//!
//! `Buffer` is a fixed-length heap slab whose length *is* the capacity. It
//! knows nothing about rows or columns; the owning `Matrix` tracks how many
//! leading slots are logically valid. Every reallocation builds the new slab
//! before the old one is dropped, so a grow or shrink always yields a
//! distinct allocation.

use std::ptr;

#[derive(Debug, Default, Clone)]
pub struct Buffer {
    data: Box<[f64]>,
}

impl Buffer {
    /// A buffer with no allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-filled buffer holding exactly `capacity` elements.
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity].into_boxed_slice(),
        }
    }

    /// Take ownership of `data`; the capacity becomes `data.len()`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// Start of the allocation, or null when nothing is allocated.
    pub fn as_ptr(&self) -> *const f64 {
        if self.is_allocated() {
            self.data.as_ptr()
        } else {
            ptr::null()
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Replace the allocation with one of exactly `capacity` elements,
    /// carrying over the first `keep` elements and zero-filling the rest.
    pub fn reallocate(&mut self, capacity: usize, keep: usize) {
        let keep = keep.min(capacity).min(self.capacity());
        let mut next = Buffer::zeroed(capacity);
        next.data[..keep].copy_from_slice(&self.data[..keep]);
        *self = next;
    }

    /// Drop the allocation entirely.
    pub fn release(&mut self) {
        self.data = Box::default();
    }

    /// Copy `values` into the front of the buffer. Callers guarantee the
    /// buffer is large enough.
    pub fn copy_prefix_from(&mut self, values: &[f64]) {
        self.data[..values.len()].copy_from_slice(values);
    }
}
