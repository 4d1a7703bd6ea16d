use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("index ({row}, {column}) is out of range for a relation of size {size}")]
    OutOfRange { row: usize, column: usize, size: usize },
    #[error("a relation of size {size} does not fit in memory")]
    TooLarge { size: usize },
    #[error("pair ({row}, {column}) is not 1-indexed")]
    ZeroCoordinate { row: usize, column: usize },
    #[error("grid row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("expected {expected} labels, got {actual}")]
    LabelCount { expected: usize, actual: usize },
    #[error("vertex {vertex} is out of range for a graph with {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },
    /// The relation handed to the leveler is not acyclic, so some elements
    /// never run out of predecessors.
    #[error("precondition violated: elements {elements:?} form a cycle")]
    CyclicOrder { elements: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, RelationError>;
