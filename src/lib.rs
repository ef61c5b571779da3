//! Growable LIFO stacks.
//!
//! [`Stack`] holds any element type in a contiguous buffer that doubles when full.
//! [`BitStack`] holds booleans packed 64 to a `u64` word. Both implement [`Lifo`], and
//! both report popping or peeking an empty stack as [`StackError::Empty`].
//!
//! ```
//! use microstack::{BitStack, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let mut flags = BitStack::new();
//! flags.push(true);
//! assert_eq!(flags.top(), Ok(true));
//! ```

pub mod bit_stack;
pub mod error;
pub mod lifo;
pub mod stack;

pub use bit_stack::BitStack;
pub use error::{Result, StackError};
pub use lifo::Lifo;
pub use stack::Stack;
