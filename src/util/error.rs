use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for container with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty container!")
    }
}

impl Error for EmptyContainer {}

#[derive(Debug, PartialEq, Eq)]
pub struct InsufficientCapacity {
    pub required: usize,
    pub available: usize,
}

impl Display for InsufficientCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destination with space for {} elements cannot hold {}!",
            self.available, self.required
        )
    }
}

impl Error for InsufficientCapacity {}

#[derive(Debug, PartialEq, Eq)]
pub struct Unimplemented {
    pub operation: &'static str,
}

impl Display for Unimplemented {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation {} is not supported!", self.operation)
    }
}

impl Error for Unimplemented {}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum CopyError {
    IndexOutOfBounds(IndexOutOfBounds),
    InsufficientCapacity(InsufficientCapacity),
}
