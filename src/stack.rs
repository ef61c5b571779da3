use tracing::{debug, trace};

use crate::error::{Result, StackError};
use crate::lifo::Lifo;

/// A simple stack implementation.
///
/// The stack keeps its own logical capacity on top of the owned buffer so the growth
/// policy is explicit: when a push finds the stack full, the capacity doubles and the
/// live elements are moved into a fresh buffer.
#[derive(Debug)]
pub struct Stack<T> {
    stack: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Capacity of a stack built with [`Stack::new`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Initializes a new stack with the default capacity.
    pub fn new() -> Stack<T> {
        Stack::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Initializes a new stack with the given capacity.
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            stack: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a new value onto the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.stack.len() == self.capacity {
            self.grow();
        }
        self.stack.push(value);
    }

    /// Builds a value from `args` and pushes it onto the stack.
    #[inline]
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.push(T::from(args));
    }

    /// Pops the top value from the stack.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.stack.pop().ok_or(StackError::Empty)
    }

    /// Peeks at the top value of the stack.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.stack.last().ok_or(StackError::Empty)
    }

    /// Returns a copy of the top value of the stack.
    #[inline]
    pub fn top(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek().cloned()
    }

    /// Returns the length of the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves the live elements into a buffer of exactly `new_capacity` slots.
    ///
    /// Fails with [`StackError::CapacityBelowLen`] instead of dropping elements when
    /// `new_capacity` cannot hold them all. The stack is unchanged on failure.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let len = self.stack.len();
        if new_capacity < len {
            return Err(StackError::CapacityBelowLen {
                requested: new_capacity,
                len,
            });
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity, len, "resizing stack"
        );
        self.reallocate(new_capacity);
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty with no storage allocated.
    pub fn take(&mut self) -> Stack<T> {
        std::mem::replace(self, Stack::with_capacity(0))
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            self.capacity.saturating_mul(2)
        };
        self.reallocate(new_capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            len = self.stack.len(),
            "reallocating stack buffer"
        );

        let mut stack = Vec::with_capacity(new_capacity);
        stack.append(&mut self.stack);
        // The old buffer is released here.
        self.stack = stack;
        self.capacity = new_capacity;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Vec::with_capacity(self.capacity);
        stack.extend_from_slice(&self.stack);
        Stack {
            stack,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.stack.clear();
        self.stack.reserve_exact(source.capacity);
        self.stack.extend_from_slice(&source.stack);
        self.capacity = source.capacity;
    }
}

/// Two stacks are equal when their live elements are, regardless of capacity.
impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Clone> Lifo for Stack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        Stack::push(self, value);
    }

    fn pop(&mut self) -> Result<T> {
        Stack::pop(self)
    }

    fn top(&self) -> Result<T> {
        Stack::top(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}
