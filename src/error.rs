/// Errors returned by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// `top` or `pop` was called on a stack with no elements.
    #[error("stack is empty")]
    Empty,

    /// `resize` was asked for fewer slots than there are live elements.
    #[error("requested capacity {requested} is below the current length {len}")]
    CapacityBelowLen {
        /// The capacity passed to `resize`.
        requested: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, StackError>;
