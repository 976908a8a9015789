//! A resizable `i32` buffer with explicit capacity management.

use intbuf_common::{Result, error::Error, verify_arg};

/// A resizable container of `i32` values backed by a contiguous buffer.
///
/// The buffer tracks its capacity explicitly: elements at positions
/// `[0, count)` are live, positions `[count, capacity)` are stale and never
/// observable through the public API. Growth reallocates to
/// `capacity + capacity / 2` (falling back to the exact minimum, or to
/// `DEFAULT_CAPACITY` when growing from a zero-capacity buffer), which gives
/// O(1) amortized appends. Capacity only shrinks through an explicit
/// [`IntBuffer::trim_to_size`] call.
///
/// Index and capacity parameters are signed, mirroring the element domain:
/// negative arguments are rejected with a distinct error message rather than
/// being unrepresentable.
pub struct IntBuffer {
    /// The underlying buffer; `storage.len()` is the capacity.
    storage: Box<[i32]>,
    /// Number of live elements.
    count: usize,
}

/// Capacity used by [`IntBuffer::new`] and when growing a zero-capacity buffer.
pub const DEFAULT_CAPACITY: usize = 10;

impl IntBuffer {
    /// Creates an empty buffer with the default capacity of 10.
    pub fn new() -> IntBuffer {
        IntBuffer {
            storage: allocate(DEFAULT_CAPACITY),
            count: 0,
        }
    }

    /// Creates an empty buffer with exactly the requested capacity.
    ///
    /// Fails with `InvalidArgument` if `capacity` is negative.
    pub fn with_capacity(capacity: i32) -> Result<IntBuffer> {
        verify_arg!(capacity, capacity >= 0);
        Ok(IntBuffer {
            storage: allocate(capacity as usize),
            count: 0,
        })
    }

    /// Returns the number of live elements.
    pub fn size(&self) -> i32 {
        self.count as i32
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of elements the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.count]
    }

    /// Appends `value` at the end of the buffer, growing it first if full.
    pub fn add(&mut self, value: i32) {
        if self.count == self.storage.len() {
            self.grow(self.count + 1);
        }
        self.storage[self.count] = value;
        self.count += 1;
    }

    /// Inserts `value` at `index`, shifting elements at `[index, count)` one
    /// position right. `index == count` behaves like [`IntBuffer::add`].
    ///
    /// Fails with `IndexOutOfRange` if `index` is negative or larger than the
    /// element count. Bounds are checked before any mutation.
    pub fn insert_at(&mut self, value: i32, index: i32) -> Result<()> {
        if index < 0 {
            return Err(Error::index_negative(index));
        }
        let index = index as usize;
        if index > self.count {
            return Err(Error::index_too_large(index as i32, self.count));
        }
        if self.count == self.storage.len() {
            self.grow(self.count + 1);
        }
        self.storage.copy_within(index..self.count, index + 1);
        self.storage[index] = value;
        self.count += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting the elements
    /// after it one position left to close the gap.
    ///
    /// Fails with `IndexOutOfRange` if `index` is negative (distinct message)
    /// or not less than the element count; bounds are checked before any
    /// mutation. The vacated trailing slot is reset to zero.
    pub fn remove_at(&mut self, index: i32) -> Result<i32> {
        if index >= self.count as i32 {
            return Err(Error::index_too_large(index, self.count));
        }
        if index < 0 {
            return Err(Error::index_negative(index));
        }
        let index = index as usize;
        let removed = self.storage[index];
        self.storage.copy_within(index + 1..self.count, index);
        self.count -= 1;
        self.storage[self.count] = 0;
        Ok(removed)
    }

    /// Returns the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index` is negative or not less than
    /// the element count.
    pub fn get(&self, index: i32) -> Result<i32> {
        if index >= self.count as i32 {
            return Err(Error::index_too_large(index, self.count));
        }
        if index < 0 {
            return Err(Error::index_negative(index));
        }
        Ok(self.storage[index as usize])
    }

    /// Returns the position of the first element equal to `target`, or -1 if
    /// no element matches.
    pub fn index_of(&self, target: i32) -> i32 {
        self.as_slice()
            .iter()
            .position(|&value| value == target)
            .map_or(-1, |index| index as i32)
    }

    /// Returns true if some element equals `target`.
    pub fn contains(&self, target: i32) -> bool {
        self.index_of(target) >= 0
    }

    /// Resets every live element to zero.
    ///
    /// The element count and the capacity are left unchanged: after `clear`,
    /// the buffer still reports its previous size and every `get` within it
    /// returns zero. This zero-out-but-keep-length contract is part of the
    /// public behavior, not an implementation detail.
    pub fn clear(&mut self) {
        self.storage[..self.count].fill(0);
    }

    /// Reallocates the buffer to exactly the element count, if the capacity
    /// currently exceeds it. Capacity lost this way is only regained through
    /// regular growth.
    pub fn trim_to_size(&mut self) {
        if self.count < self.storage.len() {
            self.reallocate(self.count);
        }
    }

    /// Renders the live elements as `[1, 2, 3]` (or `[]` when empty).
    ///
    /// Trims the buffer to size first. The trim is part of the contract:
    /// rendering a buffer for display also permanently shrinks its capacity
    /// to the element count.
    pub fn to_display_string(&mut self) -> String {
        self.trim_to_size();
        let mut rendered = String::from("[");
        for (index, value) in self.as_slice().iter().enumerate() {
            if index > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&value.to_string());
        }
        rendered.push(']');
        rendered
    }

    /// Sorts the live elements ascending, in place, with a counting sort.
    ///
    /// Cost is O(n + maxAbsoluteValue); see [`crate::sort::counting_sort`]
    /// for the magnitude-bounded scaling limit.
    pub fn sort(&mut self) {
        let count = self.count;
        crate::sort::counting_sort(&mut self.storage[..count]);
    }

    /// Reserves capacity for at least `min_capacity` elements, per the
    /// amortized growth policy.
    fn grow(&mut self, min_capacity: usize) {
        self.reallocate(self.next_capacity(min_capacity));
    }

    fn next_capacity(&self, min_capacity: usize) -> usize {
        let old_capacity = self.storage.len();
        let new_capacity = old_capacity + old_capacity / 2;
        if new_capacity <= min_capacity {
            if old_capacity == 0 {
                return DEFAULT_CAPACITY.max(min_capacity);
            }
            return min_capacity;
        }
        new_capacity
    }

    /// Replaces the buffer with a fresh allocation of `new_capacity` slots,
    /// copying the live elements over. The old allocation is dropped, never
    /// aliased.
    fn reallocate(&mut self, new_capacity: usize) {
        let mut storage = allocate(new_capacity);
        storage[..self.count].copy_from_slice(&self.storage[..self.count]);
        self.storage = storage;
    }
}

impl Default for IntBuffer {
    fn default() -> IntBuffer {
        IntBuffer::new()
    }
}

impl std::fmt::Debug for IntBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntBuffer")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

fn allocate(capacity: usize) -> Box<[i32]> {
    vec![0; capacity].into_boxed_slice()
}
