use crate::error::Result;

/// The capability set shared by every stack in this crate.
///
/// `Stack<T>` and `BitStack` store their elements very differently, but callers that
/// only push, pop and look at the top can be written once against this trait.
pub trait Lifo {
    type Item;

    /// Pushes a new value onto the stack.
    fn push(&mut self, value: Self::Item);

    /// Removes the top value and returns it.
    fn pop(&mut self) -> Result<Self::Item>;

    /// Returns a copy of the top value without removing it.
    fn top(&self) -> Result<Self::Item>;

    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns true if the stack holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
