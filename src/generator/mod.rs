//! Catalog generation
//!
//! Builds the anagram class graph from a word list and enumerates the paths
//! that make up a catalog.

mod graph;

pub use graph::{Class, Graph, GraphError, Label};
