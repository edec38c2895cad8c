use thiserror::Error;

/// Contract violations surfaced by [`Tree`][crate::Tree] and its traversal sequences.
///
/// None of these are transient: each one means the caller broke a precondition, so nothing in
/// this crate retries or swallows them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation that needs an element (`add`, `search`, `contains`) was handed none.
    #[error("entry cannot be absent")]
    NullArgument,

    /// The root of a tree with no nodes was requested.
    #[error("the tree is empty")]
    EmptyTree,

    /// A traversal sequence was advanced past its last element.
    #[error("no more elements in the traversal")]
    EndOfSequence,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::NullArgument.to_string(), "entry cannot be absent");
        assert_eq!(Error::EmptyTree.to_string(), "the tree is empty");
        assert_eq!(
            Error::EndOfSequence.to_string(),
            "no more elements in the traversal"
        );
    }
}
