use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, StackError};
use crate::lifo::Lifo;

/// A stack of booleans packed 64 to a word.
///
/// Bit `i` of the stack lives in `words[i / 64]` at position `i % 64`. Only the first
/// `len` bits are meaningful; bits above the top are left as they were after a pop and
/// are overwritten by the next push to that slot.
#[derive(Clone)]
pub struct BitStack {
    words: Vec<u64>,
    len: usize,
}

impl BitStack {
    pub const BITS_PER_WORD: usize = u64::BITS as usize;

    /// Number of words allocated by [`BitStack::new`].
    pub const DEFAULT_WORDS: usize = 4;

    /// Number of booleans a [`BitStack::new`] stack holds before it first grows.
    pub const DEFAULT_CAPACITY: usize = Self::DEFAULT_WORDS * Self::BITS_PER_WORD;

    /// Initializes a new stack with the default capacity.
    pub fn new() -> BitStack {
        BitStack::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Initializes a new stack able to hold at least `capacity` booleans.
    pub fn with_capacity(capacity: usize) -> BitStack {
        BitStack {
            words: vec![0; Self::words_for(capacity)],
            len: 0,
        }
    }

    /// Pushes a new value onto the stack.
    #[inline]
    pub fn push(&mut self, value: bool) {
        if self.len == self.capacity() {
            self.grow();
        }

        let (word, bit) = Self::locate(self.len);
        let mask = 1u64 << bit;
        self.words[word] = (self.words[word] & !mask) | (u64::from(value) << bit);
        self.len += 1;
    }

    /// Pops the top value from the stack.
    #[inline]
    pub fn pop(&mut self) -> Result<bool> {
        let value = self.top()?;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the top value of the stack.
    #[inline]
    pub fn top(&self) -> Result<bool> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }

        let (word, bit) = Self::locate(self.len - 1);
        Ok((self.words[word] >> bit) & 1 == 1)
    }

    /// Returns the length of the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of booleans the stack can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * Self::BITS_PER_WORD
    }

    /// Reallocates to the smallest whole number of words holding `new_capacity` bits.
    ///
    /// Fails with [`StackError::CapacityBelowLen`] when the live bits would not fit.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.len {
            return Err(StackError::CapacityBelowLen {
                requested: new_capacity,
                len: self.len,
            });
        }

        debug!(
            old_capacity = self.capacity(),
            new_capacity,
            len = self.len,
            "resizing bit stack"
        );
        self.reallocate(Self::words_for(new_capacity));
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty with no storage allocated.
    pub fn take(&mut self) -> BitStack {
        std::mem::replace(self, BitStack::with_capacity(0))
    }

    #[inline]
    fn locate(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    #[inline]
    fn words_for(bits: usize) -> usize {
        bits.div_ceil(Self::BITS_PER_WORD)
    }

    fn grow(&mut self) {
        let new_words = if self.words.is_empty() {
            Self::DEFAULT_WORDS
        } else {
            self.words.len().saturating_mul(2)
        };
        self.reallocate(new_words);
    }

    fn reallocate(&mut self, new_words: usize) {
        trace!(
            old_words = self.words.len(),
            new_words,
            len = self.len,
            "reallocating bit stack words"
        );

        let kept = new_words.min(self.words.len());
        let mut words = Vec::with_capacity(new_words);
        words.extend_from_slice(&self.words[..kept]);
        words.resize(new_words, 0);
        self.words = words;
    }
}

impl Default for BitStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Two bit stacks are equal when their live bits are, regardless of capacity or
/// whatever was left above the top.
impl PartialEq for BitStack {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let (full, rest) = Self::locate(self.len);
        if self.words[..full] != other.words[..full] {
            return false;
        }
        if rest == 0 {
            return true;
        }

        let mask = (1u64 << rest) - 1;
        self.words[full] & mask == other.words[full] & mask
    }
}

impl Eq for BitStack {}

impl fmt::Debug for BitStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = (0..self.len)
            .map(|i| {
                let (word, bit) = Self::locate(i);
                if (self.words[word] >> bit) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect();

        f.debug_struct("BitStack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bits", &bits)
            .finish()
    }
}

impl Extend<bool> for BitStack {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<bool> for BitStack {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut stack = BitStack::new();
        stack.extend(iter);
        stack
    }
}

impl Lifo for BitStack {
    type Item = bool;

    fn push(&mut self, value: bool) {
        BitStack::push(self, value);
    }

    fn pop(&mut self) -> Result<bool> {
        BitStack::pop(self)
    }

    fn top(&self) -> Result<bool> {
        BitStack::top(self)
    }

    fn len(&self) -> usize {
        BitStack::len(self)
    }

    fn is_empty(&self) -> bool {
        BitStack::is_empty(self)
    }
}
