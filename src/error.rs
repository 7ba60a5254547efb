use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The red fraction of an empty tree is 0/0.
    #[error("the tree is empty; its share of red nodes is undefined")]
    EmptyTree,
    #[error("no count was given")]
    MissingCount,
    #[error("{0:?} is not a non-negative integer")]
    InvalidCount(String),
}
